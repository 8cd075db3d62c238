use formula_core::model::Verdict;
use services::DeckNotice;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
        }
    }
}

/// A transient message shown by the toaster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub kind: ToastKind,
    pub message: String,
}

impl ToastVm {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }
}

impl From<&DeckNotice> for ToastVm {
    fn from(notice: &DeckNotice) -> Self {
        match notice {
            DeckNotice::Shuffled => Self::info("Карточки перемешаны!"),
            DeckNotice::TrackingStarted => Self::info("Начинаем отслеживать прогресс!"),
            DeckNotice::SessionComplete(report) => {
                let percent = report.percent();
                match report.verdict() {
                    Verdict::Pass => Self::success(format!("Отличная работа! Результат: {percent}%")),
                    Verdict::Retry => Self::info(format!("Попробуй еще раз! Результат: {percent}%")),
                }
            }
        }
    }
}
