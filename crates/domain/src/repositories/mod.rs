//! Repository接口定义
//!
//! 定义数据访问层的抽象接口，遵循清洁架构原则，内层定义接口，外层实现接口。

pub mod check_in_repository;
pub mod gym_repository;
pub mod user_repository;

// 重新导出所有Repository特征
pub use check_in_repository::CheckInRepository;
pub use gym_repository::GymRepository;
pub use user_repository::UserRepository;

/// 分页参数
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub offset: u64,
    pub limit: u64,
}

impl Pagination {
    /// 列表接口统一的每页条数。
    pub const DEFAULT_PAGE_SIZE: u32 = 20;

    pub fn new(page: u32, page_size: u32) -> Self {
        let page = page.max(1);
        let offset = ((page - 1) as u64) * page_size as u64;
        let limit = page_size as u64;
        Self {
            page,
            page_size,
            offset,
            limit,
        }
    }

    /// 第 `page` 页，使用默认每页条数（页码从 1 开始）。
    pub fn for_page(page: u32) -> Self {
        Self::new(page, Self::DEFAULT_PAGE_SIZE)
    }
}
