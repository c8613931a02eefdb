pub mod file;
pub mod logging;

pub use file::{
    ensure_directory_exists, list_directory, move_if_exists, remove_if_exists, safe_move_file,
    write_file, DirectoryListing,
};
pub use logging::init_logging;
