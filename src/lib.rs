pub mod codec;
pub mod model;
pub mod storage;

pub use codec::{BookRecord, CodecError, Export};
pub use model::*;
pub use storage::*;
