// Member search module
// Search conditions, predicate composition, projection rows and paging

pub mod condition;
pub mod dto;
pub mod page;
pub mod predicate;

pub use condition::MemberSearchCondition;
pub use dto::MemberTeamDto;
pub use page::{
    CountStrategy, Direction, Page, PageRequest, PageRequestError, Sort, SortProperty,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use predicate::{MemberFilter, MemberPredicate};
