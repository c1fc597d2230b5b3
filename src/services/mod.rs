// Application services
// Orchestrate domain logic over repository ports

pub mod member_search;

pub use member_search::MemberSearchService;
