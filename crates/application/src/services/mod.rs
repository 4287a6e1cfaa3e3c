mod record_annotator;

pub use record_annotator::RecordAnnotator;
