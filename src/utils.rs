mod data_dir;
pub use data_dir::{DEFAULT_DATA_DIR, locate_data_dir};

mod format_bytes;
pub use format_bytes::format_bytes;

mod verify_file_existence;
pub use verify_file_existence::verify_file_existence;

mod xxh3_build_hasher;
pub use xxh3_build_hasher::{Xxh3BuildHasher, Xxh3Hasher};
