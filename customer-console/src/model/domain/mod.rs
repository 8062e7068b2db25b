//! 领域模型
//!
//! 客户记录本身来自 `customer-client`，这里只补充界面侧的取值约定。

mod customer;

pub use customer::{
    ACTIVE_FALSE, ACTIVE_OPTIONS, ACTIVE_TRUE, GENDER_OPTIONS, active_literal,
    parse_active_literal,
};
