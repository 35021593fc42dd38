pub mod error;
pub mod library;
pub mod record;
pub mod xml;

pub use error::CodecError;
pub use record::BookRecord;

pub trait Export {
    fn to_json(&self) -> Result<String, CodecError>;
    fn to_xml(&self) -> Result<String, CodecError>;
}
