//! Projection of an issue list onto map markers.
//!
//! Markers are keyed by issue id. Updates are applied as patches so
//! that unchanged markers keep their identity.

use std::collections::BTreeMap;

use crate::entities::*;

pub const ICON_BASE_URL: &str = "http://maps.google.com/mapfiles/ms/icons/";
pub const DEFAULT_ZOOM: u8 = 13;
pub const HIGHLIGHT_ZOOM: u8 = 15;

pub fn default_center() -> MapPoint {
    MapPoint::try_from_lat_lng_deg(15.8585, 74.5069).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerIcon {
    Highlighted,
    Normal,
}

impl MarkerIcon {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Highlighted => "red-dot.png",
            Self::Normal => "blue-dot.png",
        }
    }

    pub fn url(self) -> String {
        format!("{ICON_BASE_URL}{}", self.file_name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub issue_id: Id,
    pub pos: MapPoint,
    pub title: String,
    pub icon: MarkerIcon,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: MapPoint,
    pub zoom: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    pub default_center: MapPoint,
    pub default_zoom: u8,
    pub highlight_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: default_center(),
            default_zoom: DEFAULT_ZOOM,
            highlight_zoom: HIGHLIGHT_ZOOM,
        }
    }
}

/// A single change applied to the marker set.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerPatch {
    Added(Id),
    Removed(Id),
    Moved(Id),
    IconChanged(Id, MarkerIcon),
}

/// Receives the issue of a clicked marker.
pub trait SelectIssue {
    fn issue_selected(&mut self, issue: &Issue);
}

impl<F> SelectIssue for F
where
    F: FnMut(&Issue),
{
    fn issue_selected(&mut self, issue: &Issue) {
        self(issue)
    }
}

#[derive(Debug)]
pub struct MapView {
    config: MapConfig,
    issues: BTreeMap<Id, Issue>,
    markers: BTreeMap<Id, Marker>,
    highlighted: Option<Id>,
    viewport: Viewport,
}

impl MapView {
    pub fn new(config: MapConfig) -> Self {
        let viewport = Viewport {
            center: config.default_center,
            zoom: config.default_zoom,
        };
        Self {
            config,
            issues: Default::default(),
            markers: Default::default(),
            highlighted: None,
            viewport,
        }
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn highlighted(&self) -> Option<&Id> {
        self.highlighted.as_ref()
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    pub fn marker(&self, issue_id: &str) -> Option<&Marker> {
        self.markers.get(issue_id)
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Brings the markers in line with the given issues.
    ///
    /// Issues without coordinates get no marker. The viewport follows
    /// the highlighted issue if it is part of the new list.
    pub fn set_issues(&mut self, issues: impl IntoIterator<Item = Issue>) -> Vec<MarkerPatch> {
        let mut patches = Vec::new();
        self.issues = issues
            .into_iter()
            .map(|issue| (issue.id.clone(), issue))
            .collect();
        let stale: Vec<_> = self
            .markers
            .keys()
            .filter(|id| {
                self.issues
                    .get(*id)
                    .is_none_or(|issue| issue.pos.is_none())
            })
            .cloned()
            .collect();
        for id in stale {
            self.markers.remove(&id);
            patches.push(MarkerPatch::Removed(id));
        }
        for (id, issue) in &self.issues {
            let Some(pos) = issue.pos else {
                continue;
            };
            let icon = icon_for(id, self.highlighted.as_ref());
            match self.markers.get_mut(id) {
                Some(marker) => {
                    if marker.pos != pos {
                        marker.pos = pos;
                        patches.push(MarkerPatch::Moved(id.clone()));
                    }
                    marker.title.clone_from(&issue.title);
                }
                None => {
                    let marker = Marker {
                        issue_id: id.clone(),
                        pos,
                        title: issue.title.clone(),
                        icon,
                    };
                    self.markers.insert(id.clone(), marker);
                    patches.push(MarkerPatch::Added(id.clone()));
                }
            }
        }
        log::debug!(
            "{} markers for {} issues ({} changes)",
            self.markers.len(),
            self.issues.len(),
            patches.len()
        );
        self.center_on_highlighted();
        patches
    }

    /// Changes the highlighted issue.
    ///
    /// Only the icons of the previously and the newly highlighted markers
    /// change. The viewport is centered on the highlighted issue.
    pub fn set_highlighted(&mut self, issue_id: Option<Id>) -> Vec<MarkerPatch> {
        if self.highlighted == issue_id {
            return Vec::new();
        }
        let previous = std::mem::replace(&mut self.highlighted, issue_id);
        let mut patches = Vec::new();
        for id in previous.iter().chain(self.highlighted.iter()) {
            let icon = icon_for(id, self.highlighted.as_ref());
            if let Some(marker) = self.markers.get_mut(id) {
                if marker.icon != icon {
                    marker.icon = icon;
                    patches.push(MarkerPatch::IconChanged(id.clone(), icon));
                }
            }
        }
        self.center_on_highlighted();
        patches
    }

    fn center_on_highlighted(&mut self) {
        let center = self
            .highlighted
            .as_ref()
            .and_then(|id| self.issues.get(id))
            .and_then(|issue| issue.pos);
        if let Some(center) = center {
            self.viewport = Viewport {
                center,
                zoom: self.config.highlight_zoom,
            };
        }
    }

    /// A marker was clicked.
    ///
    /// Returns `false` if there is no marker for this issue.
    pub fn click(&self, issue_id: &str, on_select: &mut impl SelectIssue) -> bool {
        if !self.markers.contains_key(issue_id) {
            return false;
        }
        let Some(issue) = self.issues.get(issue_id) else {
            return false;
        };
        on_select.issue_selected(issue);
        true
    }
}

fn icon_for(id: &Id, highlighted: Option<&Id>) -> MarkerIcon {
    if highlighted == Some(id) {
        MarkerIcon::Highlighted
    } else {
        MarkerIcon::Normal
    }
}
