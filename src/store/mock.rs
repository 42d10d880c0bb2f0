//! 测试用内存存储
//!
//! 模拟远程存储的行为：单调递增的数字 id、按请求原子地修改集合，
//! 并支持按类别注入失败（用于对账测试）。

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

use super::RecordStore;
use crate::error::{CoreError, Result};
use crate::model::{NewTask, Task};

pub struct MockStore {
    records: Mutex<Vec<Task>>,
    next_id: AtomicI64,
    /// 为 true 时 create/update/delete 全部失败
    fail_mutations: AtomicBool,
    /// 为 true 时 list 失败
    fail_list: AtomicBool,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_mutations: AtomicBool::new(false),
            fail_list: AtomicBool::new(false),
        }
    }

    pub fn set_fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// 服务端当前的记录快照（测试断言用）
    pub fn snapshot(&self) -> Vec<Task> {
        self.records.lock().unwrap().clone()
    }

    fn check_mutation(&self) -> Result<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            Err(CoreError::request("injected mutation failure"))
        } else {
            Ok(())
        }
    }
}

impl RecordStore for MockStore {
    fn list(&self) -> Result<Vec<Task>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(CoreError::request("injected list failure"));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    fn create(&self, new: &NewTask) -> Result<Task> {
        self.check_mutation()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let task = Task {
            id: id.to_string(),
            title: new.title.clone(),
            completed: new.completed,
            updated_at: new.updated_at.clone(),
        };
        self.records.lock().unwrap().push(task.clone());
        Ok(task)
    }

    fn update(&self, task: &Task) -> Result<Task> {
        self.check_mutation()?;
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => {
                *existing = task.clone();
                Ok(task.clone())
            }
            None => Err(CoreError::request(format!("no record with id {}", task.id))),
        }
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.check_mutation()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|t| t.id != id);
        if records.len() == before {
            return Err(CoreError::request(format!("no record with id {}", id)));
        }
        Ok(())
    }
}
