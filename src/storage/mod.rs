pub mod raw_stream;

pub use raw_stream::create_raw_stream;
