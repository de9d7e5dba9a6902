//! ContactActions port - behavior behind the hero buttons
//!
//! Templates only place the buttons; what "save contact" and "exchange
//! contact" do is supplied by the host.

use crate::domain::entities::ViewModel;

/// Action exposed by every template's hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroAction {
    /// Download the card as a vCard
    SaveContact,
    /// Open the contact-exchange flow
    ExchangeContact,
}

impl HeroAction {
    pub const ALL: [HeroAction; 2] = [HeroAction::SaveContact, HeroAction::ExchangeContact];

    /// Value of the `data-action` attribute in rendered markup
    pub fn as_str(&self) -> &'static str {
        match self {
            HeroAction::SaveContact => "save-contact",
            HeroAction::ExchangeContact => "exchange-contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeroAction::SaveContact => "Save contact",
            HeroAction::ExchangeContact => "Exchange contact",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == raw.trim())
    }
}

/// Host callbacks for hero actions
pub trait ContactActions {
    fn save_contact(&mut self, card: &ViewModel);
    fn open_exchange_contact(&mut self, card: &ViewModel);
}
