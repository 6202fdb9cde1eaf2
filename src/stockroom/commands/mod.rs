use crate::catalog::{DisplayProduct, DoctorReport};
use crate::index::Handle;
use crate::model::Product;

pub mod add;
pub mod doctor;
pub mod list;
pub mod load;
pub mod remove;
pub mod save;
pub mod view;

pub(crate) const NOT_FOUND: &str = "Produkten hittades inte.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<DisplayProduct>,
    pub assigned_handle: Option<Handle>,
    pub doctor_report: Option<DoctorReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<DisplayProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_assigned_handle(mut self, handle: Handle) -> Self {
        self.assigned_handle = Some(handle);
        self
    }

    pub fn with_doctor_report(mut self, report: DoctorReport) -> Self {
        self.doctor_report = Some(report);
        self
    }

    /// True when the command only reported that nothing matched.
    pub fn is_not_found(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error && m.content == NOT_FOUND)
    }
}

/// Raw user input for a new product. Numbers stay text until validated.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub name: String,
    pub desc: String,
    pub price: String,
    pub quantity: String,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        desc: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}
