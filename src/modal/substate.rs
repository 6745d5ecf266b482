//! Gameplay Substate Tables
//!
//! Network handlers usually only know *which* condition happened (server is
//! rebooting, player got kicked, ...). These tables fill in the priority tier
//! and the default actions so the handler can call
//! [`ModalEngine::present_substate`](super::ModalEngine::present_substate)
//! with whatever partial payload it has.
//!
//! A substate's name doubles as the request id, so presenting the same
//! substate twice replaces the earlier request instead of stacking a copy.

use super::priority::PriorityTier;
use super::request::{ModalAction, Request};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gameplay-level condition that may surface a modal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Substate {
    ServerShutdown,
    ServerReboot,
    Kicked,
    OtherKicked,
    Dead,
    OtherDead,
    PausedForOtherMenu,
    Disconnected,
    OtherDisconnected,
    Rejoined,
    OtherRejoined,
    WaitingOnStart,
    CharacterBuild,
    CharacterClass,
    CharacterStats,
    QuestWindow,
    /// Any name the tables don't know about
    Other(String),
}

impl Substate {
    /// Wire name, also used as the request id
    pub fn name(&self) -> &str {
        match self {
            Substate::ServerShutdown => "server_shutdown",
            Substate::ServerReboot => "server_reboot",
            Substate::Kicked => "kicked",
            Substate::OtherKicked => "other_kicked",
            Substate::Dead => "dead",
            Substate::OtherDead => "other_dead",
            Substate::PausedForOtherMenu => "paused_for_other_menu",
            Substate::Disconnected => "disconnected",
            Substate::OtherDisconnected => "other_disconnected",
            Substate::Rejoined => "rejoined",
            Substate::OtherRejoined => "other_rejoined",
            Substate::WaitingOnStart => "waiting_on_start",
            Substate::CharacterBuild => "character_build",
            Substate::CharacterClass => "character_class",
            Substate::CharacterStats => "character_stats",
            Substate::QuestWindow => "quest_window",
            Substate::Other(name) => name,
        }
    }

    /// Parse a wire name. Unknown names become [`Substate::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "server_shutdown" => Substate::ServerShutdown,
            "server_reboot" => Substate::ServerReboot,
            "kicked" => Substate::Kicked,
            "other_kicked" => Substate::OtherKicked,
            "dead" => Substate::Dead,
            "other_dead" => Substate::OtherDead,
            "paused_for_other_menu" => Substate::PausedForOtherMenu,
            "disconnected" => Substate::Disconnected,
            "other_disconnected" => Substate::OtherDisconnected,
            "rejoined" => Substate::Rejoined,
            "other_rejoined" => Substate::OtherRejoined,
            "waiting_on_start" => Substate::WaitingOnStart,
            "character_build" => Substate::CharacterBuild,
            "character_class" => Substate::CharacterClass,
            "character_stats" => Substate::CharacterStats,
            "quest_window" => Substate::QuestWindow,
            other => Substate::Other(other.to_string()),
        }
    }
}

impl From<&str> for Substate {
    fn from(name: &str) -> Self {
        Substate::from_name(name)
    }
}

impl fmt::Display for Substate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Optional presentation details supplied alongside a substate
///
/// Every field is optional; missing ones fall back to the tables below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstatePayload {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub actions: Option<Vec<ModalAction>>,
    #[serde(default)]
    pub block_input: Option<bool>,
}

impl SubstatePayload {
    pub fn with_text(text: impl Into<String>) -> Self {
        SubstatePayload {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Priority tier for a substate
pub fn priority_for_substate(substate: &Substate) -> PriorityTier {
    match substate {
        Substate::ServerShutdown | Substate::ServerReboot => PriorityTier::Critical,

        Substate::Kicked | Substate::OtherKicked | Substate::Dead | Substate::OtherDead => {
            PriorityTier::High
        }

        Substate::PausedForOtherMenu
        | Substate::Disconnected
        | Substate::OtherDisconnected
        | Substate::Rejoined
        | Substate::OtherRejoined
        | Substate::WaitingOnStart => PriorityTier::Medium,

        Substate::CharacterBuild
        | Substate::CharacterClass
        | Substate::CharacterStats
        | Substate::QuestWindow
        | Substate::Other(_) => PriorityTier::Low,
    }
}

/// Actions offered when the producer didn't supply any
pub fn default_actions_for(substate: &Substate) -> Vec<ModalAction> {
    match substate {
        Substate::ServerShutdown
        | Substate::ServerReboot
        | Substate::Kicked
        | Substate::OtherKicked
        | Substate::OtherDead => vec![ModalAction::new("ok", "OK")],
        Substate::Dead => vec![
            ModalAction::new("respawn", "Respawn"),
            ModalAction::new("spectate", "Spectate"),
        ],
        Substate::WaitingOnStart => vec![ModalAction::new("ready", "Ready")],
        Substate::Disconnected => vec![
            ModalAction::new("rejoin", "Rejoin"),
            ModalAction::new("leave", "Leave"),
        ],
        _ => vec![ModalAction::new("yes", "Yes"), ModalAction::new("no", "No")],
    }
}

/// Build the request a substate presents, filling gaps from the tables
pub fn substate_request(substate: &Substate, payload: SubstatePayload) -> Request {
    let priority = priority_for_substate(substate).value();
    let text = payload
        .text
        .unwrap_or_else(|| format!("[{}]", substate.name()));
    let actions = payload
        .actions
        .unwrap_or_else(|| default_actions_for(substate));

    Request::native(substate.name(), priority, text, actions)
        .with_block_input(payload.block_input.unwrap_or(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_ids(actions: &[ModalAction]) -> Vec<&str> {
        actions.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_priority_table() {
        assert_eq!(priority_for_substate(&Substate::ServerShutdown), PriorityTier::Critical);
        assert_eq!(priority_for_substate(&Substate::ServerReboot), PriorityTier::Critical);

        for substate in [Substate::Kicked, Substate::OtherKicked, Substate::Dead, Substate::OtherDead] {
            assert_eq!(priority_for_substate(&substate), PriorityTier::High, "{}", substate);
        }

        for substate in [
            Substate::PausedForOtherMenu,
            Substate::Disconnected,
            Substate::OtherDisconnected,
            Substate::Rejoined,
            Substate::OtherRejoined,
            Substate::WaitingOnStart,
        ] {
            assert_eq!(priority_for_substate(&substate), PriorityTier::Medium, "{}", substate);
        }

        for substate in [
            Substate::CharacterBuild,
            Substate::CharacterClass,
            Substate::CharacterStats,
            Substate::QuestWindow,
        ] {
            assert_eq!(priority_for_substate(&substate), PriorityTier::Low, "{}", substate);
        }
    }

    #[test]
    fn test_unknown_substate_is_low() {
        let substate = Substate::from_name("trading_window");
        assert_eq!(substate, Substate::Other("trading_window".to_string()));
        assert_eq!(priority_for_substate(&substate), PriorityTier::Low);
        assert_eq!(substate.name(), "trading_window");
    }

    #[test]
    fn test_names_round_trip_through_parser() {
        let known = [
            Substate::ServerShutdown,
            Substate::OtherKicked,
            Substate::PausedForOtherMenu,
            Substate::WaitingOnStart,
            Substate::QuestWindow,
        ];
        for substate in known {
            assert_eq!(Substate::from_name(substate.name()), substate);
        }
    }

    #[test]
    fn test_default_actions() {
        assert_eq!(action_ids(&default_actions_for(&Substate::ServerReboot)), vec!["ok"]);
        assert_eq!(action_ids(&default_actions_for(&Substate::Kicked)), vec!["ok"]);
        assert_eq!(
            action_ids(&default_actions_for(&Substate::Dead)),
            vec!["respawn", "spectate"]
        );
        assert_eq!(action_ids(&default_actions_for(&Substate::WaitingOnStart)), vec!["ready"]);
        assert_eq!(
            action_ids(&default_actions_for(&Substate::QuestWindow)),
            vec!["yes", "no"]
        );
    }

    #[test]
    fn test_substate_request_uses_fallbacks() {
        let request = substate_request(&Substate::Dead, SubstatePayload::default());

        assert_eq!(request.id, "dead");
        assert_eq!(request.priority, 90);
        assert!(request.block_input);
        assert_eq!(action_ids(request.actions()), vec!["respawn", "spectate"]);
        match &request.presentation {
            crate::modal::Presentation::Native { text, .. } => assert_eq!(text, "[dead]"),
            other => panic!("expected native presentation, got {:?}", other),
        }
    }

    #[test]
    fn test_substate_request_prefers_payload() {
        let payload = SubstatePayload {
            text: Some("Waiting for host".to_string()),
            actions: Some(vec![ModalAction::new("leave", "Leave")]),
            block_input: Some(false),
        };
        let request = substate_request(&Substate::WaitingOnStart, payload);

        assert_eq!(request.priority, 50);
        assert!(!request.block_input);
        assert_eq!(action_ids(request.actions()), vec!["leave"]);
    }

    #[test]
    fn test_payload_from_partial_message() {
        let payload: SubstatePayload = serde_json::from_str(r#"{ "blockInput": false }"#).unwrap();
        assert_eq!(payload.block_input, Some(false));
        assert!(payload.text.is_none());
        assert!(payload.actions.is_none());
    }
}
