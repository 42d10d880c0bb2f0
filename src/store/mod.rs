//! 远程记录存储客户端
//!
//! 四种请求类型：List / Create / Update / Delete。
//! 所有失败统一折叠为一类 "request failed" 错误，调用方只负责
//! "乐观更新 + 失败后整体 Refresh" 的对账策略。

#[cfg(test)]
pub mod mock;

use std::time::Duration;

use crate::error::Result;
use crate::model::{NewTask, Task};

/// 单次请求超时
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// 远程记录存储的请求接口
///
/// 控制器通过该 trait 访问远程存储，测试中以内存实现替换。
pub trait RecordStore: Send + Sync {
    /// 拉取完整记录集合
    fn list(&self) -> Result<Vec<Task>>;

    /// 创建记录，返回带分配 id 的完整记录
    fn create(&self, new: &NewTask) -> Result<Task>;

    /// 按 id 全量更新记录
    fn update(&self, task: &Task) -> Result<Task>;

    /// 按 id 删除记录
    fn delete(&self, id: &str) -> Result<()>;
}

/// 基于 ureq 的 HTTP 实现
///
/// `base_url` 指向集合端点；单条记录端点为 `{base_url}/{id}`。
/// 无鉴权、无分页、无过滤。
pub struct HttpStore {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build();
        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl RecordStore for HttpStore {
    fn list(&self) -> Result<Vec<Task>> {
        let response = self.agent.get(&self.base_url).call()?;
        let tasks: Vec<Task> = response.into_json()?;
        Ok(tasks)
    }

    fn create(&self, new: &NewTask) -> Result<Task> {
        let response = self.agent.post(&self.base_url).send_json(new)?;
        let task: Task = response.into_json()?;
        Ok(task)
    }

    fn update(&self, task: &Task) -> Result<Task> {
        let response = self.agent.put(&self.record_url(&task.id)).send_json(task)?;
        let updated: Task = response.into_json()?;
        Ok(updated)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.agent.delete(&self.record_url(id)).call()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_url() {
        let store = HttpStore::new("https://example.test/api/v1/Todo");
        assert_eq!(
            store.record_url("42"),
            "https://example.test/api/v1/Todo/42"
        );
    }
}
