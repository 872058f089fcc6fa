pub mod articles;
pub mod auth;
pub mod images;
pub mod pagination;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedAdmin, Capability, TokenSubject};
pub use images::ImageUploadDto;
pub use pagination::PaginatedResult;
