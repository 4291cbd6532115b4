//! 강의 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{
    AddAnswerRequest, AddQuestionRequest, CourseDataInput, CreateCourseRequest, EditCourseRequest,
};
pub use response::{
    CourseContentResponse, CourseDataResponse, CourseEnvelope, CourseListResponse, CourseResponse,
    QuestionResponse, ReplyResponse, ReviewResponse,
};
