use chrono::NaiveDate;
use tb_core::enums::TaskStatus;
use tb_core::requests::NewTask;
use tb_core::validate::TITLE_REQUIRED;

/// Raw input of the "new task" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
}

impl CreateForm {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Trim the fields and build the request, or the local error message.
    ///
    /// # Errors
    ///
    /// Returns `"Title is required"` when the trimmed title is empty.
    pub fn to_request(&self) -> Result<NewTask, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TITLE_REQUIRED);
        }
        let description = self.description.trim();

        Ok(NewTask {
            title: Some(title.to_string()),
            description: (!description.is_empty()).then(|| description.to_string()),
            status: Some(self.status.as_str().to_string()),
            due_date: self.due_date,
        })
    }
}
