pub mod answer;
pub mod exam;
pub mod question;
pub mod student;
pub mod teacher;
