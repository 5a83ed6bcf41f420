//! Drives the location search from the terminal.
//!
//! Every line is an input change unless it starts with `:`.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
    thread,
    time::Instant,
};

use anyhow::Result;
use thiserror::Error;

use civic_core::{
    entities::*,
    gateways::geolocation::ReportedPosition,
    location::{LocationSearch, LocationSearchConfig, State, Suggestions},
};
use civic_webserver::Gateways;

const HELP: &str = "\
Type an address to search for it.
  :enter          select the top suggestion or geocode the input
  :pick N         select suggestion N
  :here LAT,LNG   use the given position as current location
  :clear          clear the selection
  :quit           exit";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Input(String),
    Enter,
    Pick(usize),
    Here(MapPoint),
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ParseCommandError {
    #[error("Unknown command ':{0}' (try :help)")]
    Unknown(String),
    #[error("Expected a suggestion number")]
    Index,
    #[error("Expected a position as LAT,LNG")]
    Position,
}

impl FromStr for Command {
    type Err = ParseCommandError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Ok(Self::Input(line.to_owned()));
        };
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map(|(name, arg)| (name, arg.trim()))
            .unwrap_or((command, ""));
        match name {
            "enter" => Ok(Self::Enter),
            "clear" => Ok(Self::Clear),
            "help" => Ok(Self::Help),
            "quit" | "q" => Ok(Self::Quit),
            "pick" => arg
                .parse()
                .map(Self::Pick)
                .map_err(|_| ParseCommandError::Index),
            "here" => parse_position(arg).map(Self::Here),
            _ => Err(ParseCommandError::Unknown(name.to_owned())),
        }
    }
}

fn parse_position(arg: &str) -> Result<MapPoint, ParseCommandError> {
    let (lat, lng) = arg.split_once(',').ok_or(ParseCommandError::Position)?;
    let lat = lat.trim().parse().map_err(|_| ParseCommandError::Position)?;
    let lng = lng.trim().parse().map_err(|_| ParseCommandError::Position)?;
    MapPoint::try_from_lat_lng_deg(lat, lng).map_err(|_| ParseCommandError::Position)
}

fn describe(state: &State) -> String {
    match state {
        State::Idle => "idle".to_string(),
        State::Debouncing { query, .. } => format!("waiting to search '{query}'"),
        State::Predicting { query } => format!("predicting '{query}'"),
        State::Geocoding { address } => format!("geocoding '{address}'"),
        State::Suggesting(Suggestions::Predictions(predictions)) => predictions
            .iter()
            .enumerate()
            .map(|(i, p)| format!("  [{i}] {}", p.description))
            .collect::<Vec<_>>()
            .join("\n"),
        State::Suggesting(Suggestions::Results(results)) => results
            .iter()
            .enumerate()
            .map(|(i, r)| format!("  [{i}] {} ({})", r.formatted_address, r.pos))
            .collect::<Vec<_>>()
            .join("\n"),
        State::Selected(selection) if selection.is_cleared() => "cleared".to_string(),
        State::Selected(selection) => format!("selected {} ({})", selection.address, selection.pos),
        State::Error(kind) => format!("error: {kind}"),
    }
}

pub fn run(gateways: &Gateways, config: LocationSearchConfig) -> Result<()> {
    let mut device = ReportedPosition(None);
    let mut search = LocationSearch::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{HELP}")?;
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };
        if let Command::Here(pos) = command {
            device = ReportedPosition(Some(DevicePosition {
                pos,
                accuracy: None,
            }));
        }
        let services = gateways.location_services(&device);
        match command {
            Command::Input(input) => {
                search.input_changed(input, Instant::now());
                if let Some(deadline) = search.next_deadline() {
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                    search.tick(Instant::now(), &services);
                }
            }
            Command::Enter => search.enter(&services),
            Command::Pick(index) => {
                if !search.pick(index, &services) {
                    writeln!(stdout, "No suggestion [{index}]")?;
                }
            }
            Command::Here(_) => search.use_current_location(&services),
            Command::Clear => search.clear(),
            Command::Help => {
                writeln!(stdout, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }
        writeln!(stdout, "{}", describe(search.state()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Ok(Command::Input("Paris".into())), "Paris".parse());
        assert_eq!(Ok(Command::Enter), ":enter".parse());
        assert_eq!(Ok(Command::Pick(2)), ":pick 2".parse());
        assert_eq!(Ok(Command::Clear), " :clear ".parse());
        assert_eq!(
            Ok(Command::Here(
                MapPoint::try_from_lat_lng_deg(48.8566, 2.3522).unwrap()
            )),
            ":here 48.8566, 2.3522".parse()
        );
    }

    #[test]
    fn reject_invalid_commands() {
        assert_eq!(Err(ParseCommandError::Index), ":pick".parse::<Command>());
        assert_eq!(Err(ParseCommandError::Position), ":here 91,0".parse::<Command>());
        assert_eq!(
            Err(ParseCommandError::Unknown("jump".into())),
            ":jump".parse::<Command>()
        );
    }

    #[test]
    fn describe_suggestions() {
        let state = State::Suggesting(Suggestions::Predictions(vec![
            Prediction {
                description: "Paris, France".into(),
                place_id: "fr".into(),
            },
            Prediction {
                description: "Paris, TX, USA".into(),
                place_id: "tx".into(),
            },
        ]));
        assert_eq!("  [0] Paris, France\n  [1] Paris, TX, USA", describe(&state));
        let cleared = State::Selected(LocationSelection::cleared());
        assert_eq!("cleared", describe(&cleared));
    }
}
