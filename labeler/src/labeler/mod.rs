pub mod labeler;
pub mod storage;
