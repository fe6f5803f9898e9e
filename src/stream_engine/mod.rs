pub mod range_stream;
