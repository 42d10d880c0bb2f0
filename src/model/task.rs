use chrono::Local;
use serde::{Deserialize, Serialize};

/// 单条任务记录
///
/// `id` 由远程存储分配，是集合内唯一的身份键。
/// `updated_at` 是客户端生成的展示用时间戳，每次变更时刷新。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl Task {
    /// 状态图标
    pub fn icon(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }

    /// 翻转完成状态并刷新时间戳（不修改身份）
    pub fn toggled(&self) -> Task {
        Task {
            completed: !self.completed,
            updated_at: now_stamp(),
            ..self.clone()
        }
    }

    /// 重命名并刷新时间戳（不修改身份）
    pub fn renamed(&self, title: impl Into<String>) -> Task {
        Task {
            title: title.into(),
            updated_at: now_stamp(),
            ..self.clone()
        }
    }
}

/// 创建请求的负载，`id` 由远程存储分配后返回
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    pub completed: bool,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            updated_at: now_stamp(),
        }
    }
}

/// 生成当前时刻的展示用时间戳，如 "28/02/2026, 14:30:05"
pub fn now_stamp() -> String {
    Local::now().format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// 按 id 的数值解释降序排序（新建的记录排在最前）
///
/// 远程存储分配单调递增的数字 id；解析失败按 0 处理。
pub fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by_key(|t| std::cmp::Reverse(numeric_id(t)));
}

fn numeric_id(task: &Task) -> i64 {
    task.id.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            completed: false,
            updated_at: "01/01/2026, 00:00:00".to_string(),
        }
    }

    #[test]
    fn test_sort_newest_first() {
        let mut tasks = vec![task("2", "b"), task("10", "c"), task("1", "a")];
        sort_newest_first(&mut tasks);
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        // 数值排序，而非字典序（"10" > "2"）
        assert_eq!(ids, vec!["10", "2", "1"]);
    }

    #[test]
    fn test_sort_non_numeric_ids_fall_back() {
        let mut tasks = vec![task("abc", "x"), task("3", "y")];
        sort_newest_first(&mut tasks);
        assert_eq!(tasks[0].id, "3");
    }

    #[test]
    fn test_toggled_preserves_identity() {
        let t = task("7", "write report");
        let flipped = t.toggled();
        assert_eq!(flipped.id, "7");
        assert_eq!(flipped.title, "write report");
        assert!(flipped.completed);
        assert!(!flipped.toggled().completed);
    }

    #[test]
    fn test_renamed_preserves_identity() {
        let t = task("7", "old");
        let renamed = t.renamed("new");
        assert_eq!(renamed.id, "7");
        assert_eq!(renamed.title, "new");
        assert!(!renamed.completed);
    }

    #[test]
    fn test_wire_field_names() {
        let t = task("1", "a");
        let json = serde_json::to_value(&t).unwrap();
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("updated_at").is_none());

        let round: Task = serde_json::from_value(json).unwrap();
        assert_eq!(round, t);
    }

    #[test]
    fn test_new_task_payload() {
        let new = NewTask::new("buy milk");
        assert_eq!(new.title, "buy milk");
        assert!(!new.completed);
        let json = serde_json::to_value(&new).unwrap();
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_now_stamp_format() {
        let stamp = now_stamp();
        // "DD/MM/YYYY, HH:MM:SS"
        assert_eq!(stamp.len(), 20);
        assert_eq!(&stamp[2..3], "/");
        assert_eq!(&stamp[10..12], ", ");
    }
}
