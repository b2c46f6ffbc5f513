pub mod cell_record;
pub mod column_major;
pub mod errors;
pub mod header;
pub mod layer;
pub mod raw_file;
pub mod scalars;
pub mod writer;
