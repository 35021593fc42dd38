use super::{xml, BookRecord, CodecError, Export};
use crate::model::DigitalLibrary;

impl DigitalLibrary {
    pub fn to_records(&self) -> Vec<BookRecord> {
        self.iter().map(|book| BookRecord::from(&*book.borrow())).collect()
    }

    /// Fails on the first malformed record; no partial library is returned.
    pub fn from_records(records: Vec<BookRecord>) -> Result<Self, CodecError> {
        records
            .into_iter()
            .map(|record| record.into_book().map(|book| book.into_shared()))
            .collect()
    }

    pub fn from_json_str(json: &str) -> Result<Self, CodecError> {
        let records: Vec<BookRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_xml_str(xml: &str) -> Result<Self, CodecError> {
        Self::from_records(xml::read_records(xml)?)
    }
}

impl Export for DigitalLibrary {
    fn to_json(&self) -> Result<String, CodecError> {
        serde_json::to_string_pretty(&self.to_records()).map_err(CodecError::Json)
    }

    fn to_xml(&self) -> Result<String, CodecError> {
        xml::write_records(&self.to_records())
    }
}
