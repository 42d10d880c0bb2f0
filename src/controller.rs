//! 任务列表控制器
//!
//! 持有内存中的任务集合，并将其镜像到远程记录存储。远程调用在后台
//! 线程执行，结果经 mpsc 通道回到 UI 线程，主循环每帧轮询一次。
//!
//! 失败语义只有一种：乐观更新本地状态，远端请求失败后强制整体
//! Refresh 对账。不做部分重试、退避或冲突检测。

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::error::Result;
use crate::model::{self, NewTask, Task};
use crate::store::RecordStore;

/// 后台请求的结果
pub enum BgResult {
    /// Refresh 完成
    Refreshed(Result<Vec<Task>>),
    /// Create 往返完成（成功或失败都触发一次整体 Refresh）
    Created(Result<Task>),
    /// 乐观变更（toggle/rename/delete）的远端请求完成
    Mutated(Result<()>),
}

/// 任务列表控制器
pub struct TaskList {
    store: Arc<dyn RecordStore>,
    /// 本地集合（Refresh 后按数字 id 降序）
    tasks: Vec<Task>,
    tx: Sender<BgResult>,
    rx: Receiver<BgResult>,
    /// 未完成的后台请求数
    in_flight: usize,
    /// Create 往返进行中（期间禁止再次 Create）
    creating: bool,
    /// 最近一次请求失败的信息（UI 取走后显示）
    last_error: Option<String>,
}

impl TaskList {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            store,
            tasks: Vec::new(),
            tx,
            rx,
            in_flight: 0,
            creating: false,
            last_error: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 已完成的任务数
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Create 往返是否进行中
    pub fn creating(&self) -> bool {
        self.creating
    }

    /// 取走最近一次失败信息
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// Refresh：拉取完整集合
    ///
    /// 成功后整体替换本地状态并重新排序；失败时记录错误、本地状态
    /// 保持不变。
    pub fn refresh(&mut self) {
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let _ = tx.send(BgResult::Refreshed(store.list()));
        });
    }

    /// Create：非乐观操作，等待往返完成
    ///
    /// 空白标题或已有 Create 在途时不发起请求，返回 false。
    pub fn create(&mut self, title: &str) -> bool {
        if title.trim().is_empty() || self.creating {
            return false;
        }
        self.creating = true;
        let new = NewTask::new(title);
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let _ = tx.send(BgResult::Created(store.create(&new)));
        });
        true
    }

    /// Toggle：翻转完成状态，乐观应用
    pub fn toggle(&mut self, id: &str) {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return;
        };
        let updated = task.toggled();
        let payload = updated.clone();
        self.mutate_optimistic(
            move |tasks| replace_by_id(tasks, updated),
            move |store| store.update(&payload).map(|_| ()),
        );
    }

    /// Rename：改标题，乐观应用；空白标题是 no-op
    pub fn rename(&mut self, id: &str, title: &str) {
        if title.trim().is_empty() {
            return;
        }
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            return;
        };
        let updated = task.renamed(title);
        let payload = updated.clone();
        self.mutate_optimistic(
            move |tasks| replace_by_id(tasks, updated),
            move |store| store.update(&payload).map(|_| ()),
        );
    }

    /// Delete：从本地集合立即移除，乐观应用
    ///
    /// 失败触发的 Refresh 会在远端删除实际未发生时把记录恢复回来。
    pub fn delete(&mut self, id: &str) {
        let id = id.to_string();
        let target = id.clone();
        self.mutate_optimistic(
            move |tasks| tasks.retain(|t| t.id != id),
            move |store| store.delete(&target),
        );
    }

    /// 乐观变更的统一入口：先改本地，再发远端请求，失败后整体 Refresh
    fn mutate_optimistic<A, R>(&mut self, apply: A, request: R)
    where
        A: FnOnce(&mut Vec<Task>),
        R: FnOnce(&dyn RecordStore) -> Result<()> + Send + 'static,
    {
        apply(&mut self.tasks);
        let store = Arc::clone(&self.store);
        let tx = self.tx.clone();
        self.in_flight += 1;
        thread::spawn(move || {
            let _ = tx.send(BgResult::Mutated(request(store.as_ref())));
        });
    }

    /// 处理后台请求结果（不阻塞），返回状态是否变化
    ///
    /// 注意：多个在途请求可能乱序完成，迟到的失败会触发一次覆盖较新
    /// 本地状态的 Refresh。这是沿用的原始行为，此处有意不修复。
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            self.handle(result);
            changed = true;
        }
        changed
    }

    fn handle(&mut self, result: BgResult) {
        self.in_flight -= 1;
        match result {
            BgResult::Refreshed(Ok(mut tasks)) => {
                model::sort_newest_first(&mut tasks);
                self.tasks = tasks;
            }
            BgResult::Refreshed(Err(e)) => {
                // 本地状态保持不变，不排队重试
                self.last_error = Some(e.to_string());
            }
            BgResult::Created(result) => {
                self.creating = false;
                if let Err(e) = result {
                    self.last_error = Some(e.to_string());
                }
                // 成功或失败都整体 Refresh，重新同步远端分配的 id
                self.refresh();
            }
            BgResult::Mutated(Ok(())) => {}
            BgResult::Mutated(Err(e)) => {
                self.last_error = Some(e.to_string());
                self.refresh();
            }
        }
    }

    /// 阻塞等待所有在途请求结束（含连锁触发的 Refresh），测试用
    #[cfg(test)]
    pub fn wait_idle(&mut self) {
        use std::time::Duration;
        while self.in_flight > 0 {
            let result = self
                .rx
                .recv_timeout(Duration::from_secs(5))
                .expect("background operation timed out");
            self.handle(result);
        }
    }
}

fn replace_by_id(tasks: &mut [Task], updated: Task) {
    if let Some(slot) = tasks.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}
