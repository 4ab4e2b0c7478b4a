pub mod check;
pub mod init;
pub mod start;
pub mod stop;
pub mod tasks;
pub mod track;
pub mod users;
