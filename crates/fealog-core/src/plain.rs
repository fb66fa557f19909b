//! Plain record normalization.
//!
//! Fields come from the same boundary pattern the file was split with. An
//! unknown level token is tolerated; an unmatched record or an unparseable
//! timestamp is not.

use crate::{
    error::RecordError,
    levels::LevelAliasResolver,
    pattern::BoundaryPattern,
    time::parse_epoch_millis,
    types::{ClassifiedRecord, NormalizedEvent, SYSTEM_CATEGORY},
};

pub struct PlainRecordNormalizer<'a> {
    levels: &'a LevelAliasResolver,
}

impl<'a> PlainRecordNormalizer<'a> {
    pub fn new(levels: &'a LevelAliasResolver) -> Self {
        Self { levels }
    }

    pub fn normalize(
        &self,
        record: &ClassifiedRecord,
        pattern: &BoundaryPattern,
    ) -> Result<NormalizedEvent, RecordError> {
        let fields = pattern
            .fields(&record.text)
            .ok_or(RecordError::PatternMismatch(record.source_format))?;

        let millis = parse_epoch_millis(fields.timestamp)
            .ok_or_else(|| RecordError::BadTimestamp(fields.timestamp.to_owned()))?;

        let level = self.levels.resolve(fields.level).map(str::to_owned);
        if level.is_none() {
            tracing::debug!(level = %fields.level, client = %record.client_name, "unresolved level");
        }

        Ok(NormalizedEvent::new(
            SYSTEM_CATEGORY,
            record.client_name.as_str(),
            level,
            serde_json::Number::from(millis),
            vec![fields.message.to_owned()],
            fields.message,
        ))
    }
}
