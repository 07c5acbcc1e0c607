//! Shop Floor - 小型加工厂工单跟踪引擎
//!
//! # 架构概述
//!
//! 本 crate 是工单系统的核心引擎，UI 层作为外部调用方：
//!
//! - **工单引擎** (`orders`): 快照替换式工单簿与全部状态变更动作
//! - **送货单** (`delivery`): 分组投影、编号、对账查询
//! - **价格记忆** (`pricing`): 登记时的历史价格自动填充
//! - **存储端口** (`store`): 共享后端 + 本地兜底，后台同步
//! - **文件交换** (`flatfile` / `backup`): 分隔文件导入导出、备份恢复
//!
//! # 模块结构
//!
//! ```text
//! shop-floor/src/
//! ├── core/          # 配置
//! ├── orders/        # 工单簿、动作、错误
//! ├── delivery/      # 送货单编号、聚合、对账
//! ├── pricing/       # 价格记忆
//! ├── store/         # 存储端口与同步 worker
//! ├── flatfile/      # 分隔文件导入导出
//! ├── backup/        # 备份导出与恢复
//! ├── reports/       # 报表聚合
//! ├── summary/       # AI 摘要端口
//! └── utils/         # 金额、日期、校验、日志
//! ```

pub mod backup;
pub mod core;
pub mod delivery;
pub mod flatfile;
pub mod orders;
pub mod pricing;
pub mod reports;
pub mod store;
pub mod summary;
pub mod utils;

// Re-export 公共类型
pub use crate::core::Config;
pub use orders::{ActionContext, Apply, OrderBook, OrderError, OrderResult, Snapshot};
pub use store::{LocalStore, OrderStore, RemoteStore, StoreError, StoreSyncWorker};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
