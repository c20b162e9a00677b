pub mod io;
pub mod request;
pub mod system;
