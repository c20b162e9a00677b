pub mod labeler;
pub mod utils;
