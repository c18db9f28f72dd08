//! iCalendar component types (RFC 5545 §3.4-3.6).

use std::str::FromStr;

use super::Property;
use super::property::names;

/// Component kind for iCalendar.
///
/// The set is closed: any other `BEGIN:` keyword is rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// VCALENDAR wrapper component.
    Calendar,
    /// VEVENT component.
    Event,
    /// VTODO component.
    Todo,
    /// VJOURNAL component.
    Journal,
    /// VFREEBUSY component.
    FreeBusy,
    /// VTIMEZONE component.
    Timezone,
    /// STANDARD sub-component of VTIMEZONE.
    Standard,
    /// DAYLIGHT sub-component of VTIMEZONE.
    Daylight,
    /// VALARM component (nested within VEVENT/VTODO).
    Alarm,
}

impl ComponentKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Calendar,
        Self::Event,
        Self::Todo,
        Self::Journal,
        Self::FreeBusy,
        Self::Timezone,
        Self::Standard,
        Self::Daylight,
        Self::Alarm,
    ];

    /// Returns the string name for this component kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calendar => "VCALENDAR",
            Self::Event => "VEVENT",
            Self::Todo => "VTODO",
            Self::Journal => "VJOURNAL",
            Self::FreeBusy => "VFREEBUSY",
            Self::Timezone => "VTIMEZONE",
            Self::Standard => "STANDARD",
            Self::Daylight => "DAYLIGHT",
            Self::Alarm => "VALARM",
        }
    }

    /// Parses a component kind from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known component kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component type: {0}")]
pub struct UnknownComponentKind(pub String);

impl FromStr for ComponentKind {
    type Err = UnknownComponentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownComponentKind(s.to_string()))
    }
}

/// An iCalendar component.
///
/// Components hold properties and nested sub-components.
/// For example, a VCALENDAR contains VEVENTs, which may contain VALARMs.
///
/// Properties are grouped by name: names keep the order in which they were
/// first added, and repeated properties keep their relative order.
/// Children keep insertion order. Nothing can be removed once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    kind: ComponentKind,
    properties: Vec<(String, Vec<Property>)>,
    children: Vec<Component>,
}

impl Component {
    /// Creates a new component with the given kind.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a VEVENT component.
    #[must_use]
    pub fn event() -> Self {
        Self::new(ComponentKind::Event)
    }

    /// Creates a VTODO component.
    #[must_use]
    pub fn todo() -> Self {
        Self::new(ComponentKind::Todo)
    }

    /// Creates a VJOURNAL component.
    #[must_use]
    pub fn journal() -> Self {
        Self::new(ComponentKind::Journal)
    }

    /// Creates a VFREEBUSY component.
    #[must_use]
    pub fn freebusy_component() -> Self {
        Self::new(ComponentKind::FreeBusy)
    }

    /// Creates a VTIMEZONE component.
    #[must_use]
    pub fn timezone() -> Self {
        Self::new(ComponentKind::Timezone)
    }

    /// Creates a STANDARD component.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(ComponentKind::Standard)
    }

    /// Creates a DAYLIGHT component.
    #[must_use]
    pub fn daylight() -> Self {
        Self::new(ComponentKind::Daylight)
    }

    /// Creates a VALARM component.
    #[must_use]
    pub fn alarm() -> Self {
        Self::new(ComponentKind::Alarm)
    }

    /// Component type tag.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Adds a property to this component.
    pub fn add_property(&mut self, prop: Property) {
        if let Some((_, group)) = self
            .properties
            .iter_mut()
            .find(|(name, _)| name == prop.name())
        {
            group.push(prop);
        } else {
            self.properties.push((prop.name().to_string(), vec![prop]));
        }
    }

    /// Builder form of [`Component::add_property`].
    #[must_use]
    pub fn with_property(mut self, prop: Property) -> Self {
        self.add_property(prop);
        self
    }

    /// Adds a child component.
    pub fn add_child(&mut self, child: Component) {
        self.children.push(child);
    }

    /// Builder form of [`Component::add_child`].
    #[must_use]
    pub fn with_child(mut self, child: Component) -> Self {
        self.add_child(child);
        self
    }

    /// Iterates over all properties, grouped by name.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().flat_map(|(_, group)| group.iter())
    }

    /// Iterates over the distinct property names in first-seen order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&Property> {
        self.get_properties(name).first()
    }

    /// Returns all properties with the given name.
    #[must_use]
    pub fn get_properties(&self, name: &str) -> &[Property] {
        self.properties
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map_or(&[][..], |(_, group)| group.as_slice())
    }

    /// Returns whether at least one property with the given name exists.
    #[must_use]
    pub fn has_property(&self, name: &str) -> bool {
        self.get_property(name).is_some()
    }

    /// Nested sub-components in order of appearance.
    #[must_use]
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Returns children of a specific kind.
    #[must_use]
    pub fn children_of_kind(&self, kind: ComponentKind) -> Vec<&Component> {
        self.children.iter().filter(|c| c.kind == kind).collect()
    }

    /// Returns the UID property value if present.
    #[must_use]
    pub fn uid(&self) -> Option<&str> {
        self.get_property(names::UID).map(Property::value)
    }

    /// Returns the SUMMARY property value if present.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.get_property(names::SUMMARY).map(Property::value)
    }

    /// Returns the DESCRIPTION property value if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.get_property(names::DESCRIPTION).map(Property::value)
    }

    /// Returns all VEVENT children.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Event)
    }

    /// Returns all VTODO children.
    #[must_use]
    pub fn todos(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Todo)
    }

    /// Returns all VJOURNAL children.
    #[must_use]
    pub fn journals(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Journal)
    }

    /// Returns all VFREEBUSY children.
    #[must_use]
    pub fn freebusy(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::FreeBusy)
    }

    /// Returns all VTIMEZONE children.
    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Timezone)
    }

    /// Returns all VALARM children.
    #[must_use]
    pub fn alarms(&self) -> Vec<&Component> {
        self.children_of_kind(ComponentKind::Alarm)
    }
}

/// Top-level iCalendar object.
///
/// Wraps the root VCALENDAR component. The root is only reachable through
/// shared references, so it cannot be swapped for another kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ICalendar {
    root: Component,
}

impl ICalendar {
    /// Creates a new iCalendar with `VERSION:2.0` and the given `PRODID`.
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        let mut ical = Self::empty();
        ical.add_property(Property::with_known_name(names::VERSION, "2.0"));
        ical.add_property(Property::with_known_name(names::PRODID, prodid));
        ical
    }

    /// Creates a VCALENDAR with no properties or children.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: Component::new(ComponentKind::Calendar),
        }
    }

    /// Wraps a finished root. Callers guarantee it is a VCALENDAR.
    pub(crate) fn from_root(root: Component) -> Self {
        debug_assert_eq!(root.kind(), ComponentKind::Calendar);
        Self { root }
    }

    /// The root VCALENDAR component.
    #[must_use]
    pub const fn root(&self) -> &Component {
        &self.root
    }

    /// Returns the PRODID value.
    #[must_use]
    pub fn prodid(&self) -> Option<&str> {
        self.root.get_property(names::PRODID).map(Property::value)
    }

    /// Returns the VERSION value.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.root.get_property(names::VERSION).map(Property::value)
    }

    /// Adds a calendar-level property.
    pub fn add_property(&mut self, prop: Property) {
        self.root.add_property(prop);
    }

    /// Adds a top-level component.
    pub fn add_child(&mut self, child: Component) {
        self.root.add_child(child);
    }

    /// Adds a VEVENT component.
    pub fn add_event(&mut self, event: Component) {
        debug_assert_eq!(event.kind(), ComponentKind::Event);
        self.add_child(event);
    }

    /// Adds a VTODO component.
    pub fn add_todo(&mut self, todo: Component) {
        debug_assert_eq!(todo.kind(), ComponentKind::Todo);
        self.add_child(todo);
    }

    /// Adds a VTIMEZONE component.
    pub fn add_timezone(&mut self, tz: Component) {
        debug_assert_eq!(tz.kind(), ComponentKind::Timezone);
        self.add_child(tz);
    }

    /// Returns all VEVENT components.
    #[must_use]
    pub fn events(&self) -> Vec<&Component> {
        self.root.events()
    }

    /// Returns all VTODO components.
    #[must_use]
    pub fn todos(&self) -> Vec<&Component> {
        self.root.todos()
    }

    /// Returns all VJOURNAL components.
    #[must_use]
    pub fn journals(&self) -> Vec<&Component> {
        self.root.journals()
    }

    /// Returns all VFREEBUSY components.
    #[must_use]
    pub fn freebusy(&self) -> Vec<&Component> {
        self.root.freebusy()
    }

    /// Returns all VTIMEZONE components.
    #[must_use]
    pub fn timezones(&self) -> Vec<&Component> {
        self.root.timezones()
    }

    /// Returns all unique UIDs in this calendar.
    #[must_use]
    pub fn uids(&self) -> Vec<&str> {
        let mut uids: Vec<&str> = self.root.children().iter().filter_map(Component::uid).collect();
        uids.sort_unstable();
        uids.dedup();
        uids
    }
}

impl Default for ICalendar {
    fn default() -> Self {
        Self::new("-//calfold//calfold//EN")
    }
}
