// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoding of controller replies into a strict sum type.

use serde::Deserialize;

use crate::error::ProtocolError;
use crate::response::ResultCode;
use crate::station::Station;
use crate::types::StationState;

/// Wire shapes the controller answers with.
///
/// Tried in order; the first shape whose required fields are present wins.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawReply {
    Result {
        result: u16,
    },
    Names {
        snames: Vec<String>,
        #[serde(default)]
        maxlen: Option<usize>,
    },
    Status {
        sn: Vec<u8>,
        nstations: usize,
    },
}

/// Station names reported by `/jn`, in controller order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationNames {
    /// Names, possibly fewer than the station count.
    pub names: Vec<String>,
    /// Name buffer size, when the firmware reports it.
    pub max_len: Option<usize>,
}

/// Station count and states reported by `/js`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationStates {
    /// States, exactly `count` entries.
    pub states: Vec<StationState>,
}

impl StationStates {
    /// Returns the number of stations the controller reports.
    #[must_use]
    pub fn count(&self) -> usize {
        self.states.len()
    }
}

/// A decoded controller reply.
///
/// Every payload is classified here, before any field is read by the
/// station logic.
///
/// # Examples
///
/// ```
/// use opensprinkler_lib::response::{Reply, ResultCode};
///
/// let reply = Reply::decode(r#"{"result":1}"#).unwrap();
/// assert_eq!(reply, Reply::Acknowledged);
///
/// let reply = Reply::decode(r#"{"result":2}"#).unwrap();
/// assert_eq!(reply, Reply::AuthRejected);
///
/// let reply = Reply::decode(r#"{"result":17}"#).unwrap();
/// assert_eq!(reply, Reply::Rejected(ResultCode::OutOfRange));
///
/// assert!(Reply::decode("<html>").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Station names.
    StationNames(StationNames),
    /// Station states.
    StationStates(StationStates),
    /// The command was accepted.
    Acknowledged,
    /// The controller rejected the credential digest.
    AuthRejected,
    /// The controller refused the command.
    Rejected(ResultCode),
}

impl Reply {
    /// Decodes a reply body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::Json` if the body matches no known shape and
    /// `ProtocolError::Malformed` if a status reply is inconsistent.
    pub fn decode(body: &str) -> Result<Self, ProtocolError> {
        let raw: RawReply = serde_json::from_str(body)?;

        Ok(match raw {
            RawReply::Result { result } => match ResultCode::from(result) {
                ResultCode::Success => Self::Acknowledged,
                ResultCode::Unauthorized => Self::AuthRejected,
                other => Self::Rejected(other),
            },
            RawReply::Names { snames, maxlen } => Self::StationNames(StationNames {
                names: snames,
                max_len: maxlen,
            }),
            RawReply::Status { sn, nstations } => {
                if sn.len() < nstations {
                    return Err(ProtocolError::Malformed(format!(
                        "controller reports {nstations} stations but only {} states",
                        sn.len()
                    )));
                }
                let states = sn
                    .into_iter()
                    .take(nstations)
                    .map(|bit| StationState::from(bit != 0))
                    .collect();
                Self::StationStates(StationStates { states })
            }
        })
    }

    /// Returns the variant name, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StationNames(_) => "station names",
            Self::StationStates(_) => "station states",
            Self::Acknowledged => "acknowledgment",
            Self::AuthRejected => "authentication rejection",
            Self::Rejected(_) => "rejection",
        }
    }

    /// Extracts station names.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::UnexpectedReply` for any other variant.
    pub fn into_station_names(self) -> Result<StationNames, ProtocolError> {
        match self {
            Self::StationNames(names) => Ok(names),
            other => Err(other.unexpected("station names")),
        }
    }

    /// Extracts station states.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::UnexpectedReply` for any other variant.
    pub fn into_station_states(self) -> Result<StationStates, ProtocolError> {
        match self {
            Self::StationStates(states) => Ok(states),
            other => Err(other.unexpected("station states")),
        }
    }

    /// Checks that the reply acknowledges a command.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::UnexpectedReply` for any other variant.
    pub fn expect_ack(self) -> Result<(), ProtocolError> {
        match self {
            Self::Acknowledged => Ok(()),
            other => Err(other.unexpected("acknowledgment")),
        }
    }

    fn unexpected(&self, expected: &'static str) -> ProtocolError {
        ProtocolError::UnexpectedReply {
            expected,
            actual: self.kind(),
        }
    }
}

/// Placeholder the firmware uses for a station without a name.
#[must_use]
pub fn placeholder_name(index: usize) -> String {
    format!("S{:02}", index + 1)
}

/// Joins names and states into stations, preserving controller order.
///
/// The station count comes from the status reply. Missing or blank names
/// fall back to [`placeholder_name`]; surplus names are ignored.
#[must_use]
pub fn assemble(names: StationNames, states: &StationStates) -> Vec<Station> {
    let mut names = names.names.into_iter();
    states
        .states
        .iter()
        .enumerate()
        .map(|(index, state)| {
            let name = names
                .next()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| placeholder_name(index));
            Station::new(index, name, *state)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_names() {
        let reply =
            Reply::decode(r#"{"snames":["S01","Front Lawn"],"ignore_rain":[0],"maxlen":32}"#)
                .unwrap();
        let names = reply.into_station_names().unwrap();
        assert_eq!(names.names, vec!["S01", "Front Lawn"]);
        assert_eq!(names.max_len, Some(32));
    }

    #[test]
    fn decode_names_without_maxlen() {
        let names = Reply::decode(r#"{"snames":["A"]}"#)
            .unwrap()
            .into_station_names()
            .unwrap();
        assert_eq!(names.max_len, None);
    }

    #[test]
    fn decode_status() {
        let states = Reply::decode(r#"{"sn":[1,0,0,0,0,0,1,0],"nstations":8}"#)
            .unwrap()
            .into_station_states()
            .unwrap();
        assert_eq!(states.count(), 8);
        assert_eq!(states.states[0], StationState::On);
        assert_eq!(states.states[6], StationState::On);
        assert_eq!(states.states[7], StationState::Off);
    }

    #[test]
    fn decode_status_trims_to_count() {
        let states = Reply::decode(r#"{"sn":[0,1,1],"nstations":2}"#)
            .unwrap()
            .into_station_states()
            .unwrap();
        assert_eq!(states.count(), 2);
    }

    #[test]
    fn decode_status_short_sn_is_malformed() {
        let result = Reply::decode(r#"{"sn":[0,1],"nstations":8}"#);
        assert!(matches!(result, Err(ProtocolError::Malformed(_))));
    }

    #[test]
    fn decode_empty_station_list_is_valid() {
        let states = Reply::decode(r#"{"sn":[],"nstations":0}"#)
            .unwrap()
            .into_station_states()
            .unwrap();
        assert_eq!(states.count(), 0);
    }

    #[test]
    fn decode_garbage_is_json_error() {
        assert!(matches!(
            Reply::decode("<!DOCTYPE html>"),
            Err(ProtocolError::Json(_))
        ));
        assert!(matches!(
            Reply::decode(r#"{"unrelated":true}"#),
            Err(ProtocolError::Json(_))
        ));
    }

    #[test]
    fn wrong_variant_is_unexpected_reply() {
        let err = Reply::Acknowledged.into_station_names().unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::UnexpectedReply {
                expected: "station names",
                actual: "acknowledgment",
            }
        ));
    }

    #[test]
    fn assemble_fills_placeholders() {
        let names = StationNames {
            names: vec!["Front".to_string(), "  ".to_string()],
            max_len: None,
        };
        let states = StationStates {
            states: vec![StationState::On, StationState::Off, StationState::Off],
        };
        let stations = assemble(names, &states);
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[0].name(), "Front");
        assert_eq!(stations[1].name(), "S02");
        assert_eq!(stations[2].name(), "S03");
        assert_eq!(stations[2].index(), 2);
        assert_eq!(stations[0].state(), StationState::On);
    }

    #[test]
    fn assemble_ignores_surplus_names() {
        let names = StationNames {
            names: vec!["A".to_string(), "B".to_string()],
            max_len: None,
        };
        let states = StationStates {
            states: vec![StationState::Off],
        };
        assert_eq!(assemble(names, &states).len(), 1);
    }
}
