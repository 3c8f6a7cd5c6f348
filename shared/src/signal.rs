use std::{convert::TryFrom, fmt::Display, str::FromStr};

use crate::{Error, Result};

/// A discrete control intent sent by the controller, one byte on the wire.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signal {
    /* engine signals */
    MoveForward = 1,
    MoveBackward = 2,
    MoveLeft = 3,
    MoveRight = 4,
    StopForward = 5,
    StopBackward = 6,
    StopLeft = 7,
    StopRight = 8,
    Stop = 20,
    /* light signals */
    EnableLight = 21,
    DisableLight = 22,
    TriggerLight = 23,
}

impl Signal {
    pub const ALL: [Signal; 12] = [
        Signal::MoveForward,
        Signal::MoveBackward,
        Signal::MoveLeft,
        Signal::MoveRight,
        Signal::StopForward,
        Signal::StopBackward,
        Signal::StopLeft,
        Signal::StopRight,
        Signal::Stop,
        Signal::EnableLight,
        Signal::DisableLight,
        Signal::TriggerLight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Signal::MoveForward => "move_forward",
            Signal::MoveBackward => "move_backward",
            Signal::MoveLeft => "move_left",
            Signal::MoveRight => "move_right",
            Signal::StopForward => "stop_forward",
            Signal::StopBackward => "stop_backward",
            Signal::StopLeft => "stop_left",
            Signal::StopRight => "stop_right",
            Signal::Stop => "stop",
            Signal::EnableLight => "enable_light",
            Signal::DisableLight => "disable_light",
            Signal::TriggerLight => "trigger_light",
        }
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        signal as u8
    }
}

impl TryFrom<u8> for Signal {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Signal::MoveForward),
            2 => Ok(Signal::MoveBackward),
            3 => Ok(Signal::MoveLeft),
            4 => Ok(Signal::MoveRight),
            5 => Ok(Signal::StopForward),
            6 => Ok(Signal::StopBackward),
            7 => Ok(Signal::StopLeft),
            8 => Ok(Signal::StopRight),
            20 => Ok(Signal::Stop),
            21 => Ok(Signal::EnableLight),
            22 => Ok(Signal::DisableLight),
            23 => Ok(Signal::TriggerLight),
            _ => Err(Error::UnknownSignal(value)),
        }
    }
}

impl FromStr for Signal {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Signal::ALL.iter()
            .find(|signal| signal.name() == name)
            .copied()
            .ok_or_else(|| Error::UnknownSignalName(name.to_owned()))
    }
}

impl Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalResult {
    Ok = 0,
    Error = 1,
}

impl From<SignalResult> for u8 {
    fn from(result: SignalResult) -> Self {
        result as u8
    }
}

impl TryFrom<u8> for SignalResult {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(SignalResult::Ok),
            1 => Ok(SignalResult::Error),
            _ => Err(Error::UnknownResult(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes_are_stable() {
        let codes: Vec<u8> = Signal::ALL.iter().map(|&signal| signal.into()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7, 8, 20, 21, 22, 23]);
        for signal in Signal::ALL.iter() {
            assert_eq!(Signal::try_from(u8::from(*signal)), Ok(*signal));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Signal::try_from(1), Ok(Signal::MoveForward));
        assert_eq!(Signal::try_from(99), Err(Error::UnknownSignal(99)));
        assert_eq!(Signal::try_from(0), Err(Error::UnknownSignal(0)));
        assert_eq!(Signal::try_from(9), Err(Error::UnknownSignal(9)));
        assert_eq!(Signal::try_from(24), Err(Error::UnknownSignal(24)));
    }

    #[test]
    fn names() {
        assert_eq!("trigger_light".parse::<Signal>(), Ok(Signal::TriggerLight));
        assert_eq!(Signal::StopLeft.to_string(), "stop_left");
        assert_eq!("jump".parse::<Signal>(), Err(Error::UnknownSignalName("jump".to_owned())));
    }

    #[test]
    fn results() {
        assert_eq!(u8::from(SignalResult::Ok), 0);
        assert_eq!(u8::from(SignalResult::Error), 1);
        assert_eq!(SignalResult::try_from(2), Err(Error::UnknownResult(2)));
    }
}
