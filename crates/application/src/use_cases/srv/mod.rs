mod lookup_srv_records;

pub use lookup_srv_records::LookupSrvRecordsUseCase;
