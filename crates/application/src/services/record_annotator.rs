use std::cmp::Ordering;
use tracing::debug;
use xmpp_srv_check_domain::{
    AnswerSet, DisplayRecord, FootnoteIndex, NoteKind, RecordNote, ServiceClass, SrvAnswers,
    SrvRecord, TlsMode,
};

/// Weight is sorted descending by mapping it onto an ascending key.
const WEIGHT_SORT_BASE: u32 = 1_000_000_000;

/// Cross-references the four SRV answer sets and turns the records of one
/// service class into annotated, deterministically ordered display rows.
pub struct RecordAnnotator;

impl RecordAnnotator {
    pub fn annotate(
        answers: &SrvAnswers,
        target_class: ServiceClass,
    ) -> (Vec<DisplayRecord>, FootnoteIndex) {
        let mut annotated: Vec<(&SrvRecord, Vec<RecordNote>)> = answers
            .iter()
            .filter(|set| set.service_class() == target_class)
            .flat_map(|set| {
                set.visible_records()
                    .iter()
                    .map(move |record| (record, Self::notes_for(record, set, answers)))
            })
            .collect();

        annotated.sort_by(|(a, _), (b, _)| Self::compare(a, b));

        let records: Vec<DisplayRecord> = annotated
            .into_iter()
            .map(|(record, notes)| DisplayRecord {
                port: record.port,
                priority: record.priority,
                target: record.display_target().to_string(),
                weight: record.weight,
                notes,
            })
            .collect();

        let footnotes = FootnoteIndex::assign(&records);

        debug!(
            class = %target_class,
            records = records.len(),
            footnotes = footnotes.len(),
            "Records annotated"
        );

        (records, footnotes)
    }

    fn notes_for(record: &SrvRecord, own: &AnswerSet, answers: &SrvAnswers) -> Vec<RecordNote> {
        let mut notes = Vec::new();

        match own.tls_mode() {
            TlsMode::DirectTls => notes.push(RecordNote::direct_tls()),
            TlsMode::StartTls => {
                if record.port != own.service.standard_port() {
                    notes.push(RecordNote::non_standard_port());
                }
            }
        }

        for other in answers.iter() {
            if other.service == own.service || !other.contains_endpoint(record) {
                continue;
            }
            if let Some(kind) = NoteKind::for_port_reuse(own.service, other.service) {
                notes.push(RecordNote::port_reused(kind, other.service));
            }
        }

        notes
    }

    /// Priority ascending, weight descending, displayed target ascending,
    /// port ascending.
    pub fn compare(a: &SrvRecord, b: &SrvRecord) -> Ordering {
        Self::sort_key(a).cmp(&Self::sort_key(b))
    }

    fn sort_key(record: &SrvRecord) -> (u16, u32, &str, u16) {
        (
            record.priority,
            WEIGHT_SORT_BASE - u32::from(record.weight),
            record.display_target(),
            record.port,
        )
    }
}
