//! RFC 5545 iCalendar test fixtures.
//!
//! Examples taken from RFC 5545 Appendix A and common use cases.

/// RFC 5545 §A.1 - Minimal VEVENT
pub const VEVENT_MINIMAL: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123401@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART:19970903T163000Z\r\n\
DTEND:19970903T190000Z\r\n\
SUMMARY:Annual Employee Review\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Recurring event; RRULE and EXDATE carry raw `;` and `,`
pub const VEVENT_RECURRING: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123402@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART:19970905T090000Z\r\n\
SUMMARY:Weekly Team Meeting\r\n\
RRULE:FREQ=WEEKLY;COUNT=10;BYDAY=FR\r\n\
EXDATE:19970912T090000Z,19970919T090000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// RFC 5545 §A.2 - Basic VTODO
pub const VTODO_BASIC: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VTODO\r\n\
UID:19970901T130000Z-123403@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DUE:19970903T090000Z\r\n\
SUMMARY:Submit Tax Returns\r\n\
STATUS:NEEDS-ACTION\r\n\
END:VTODO\r\n\
END:VCALENDAR\r\n";

/// RFC 5545 §A.3 - Basic VJOURNAL
pub const VJOURNAL_BASIC: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VJOURNAL\r\n\
UID:19970901T130000Z-123404@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART:19970317T000000Z\r\n\
SUMMARY:Staff meeting minutes\r\n\
DESCRIPTION:Meeting notes from the staff meeting.\r\n\
END:VJOURNAL\r\n\
END:VCALENDAR\r\n";

/// RFC 5545 §A.4 - VFREEBUSY request
pub const VFREEBUSY_REQUEST: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VFREEBUSY\r\n\
UID:19970901T130000Z-123405@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART:19970901T090000Z\r\n\
DTEND:19970901T170000Z\r\n\
END:VFREEBUSY\r\n\
END:VCALENDAR\r\n";

/// VEVENT with VALARM
pub const VEVENT_WITH_ALARM: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123406@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART:19970903T163000Z\r\n\
SUMMARY:Meeting with reminder\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
DESCRIPTION:Reminder: Meeting in 15 minutes\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// VEVENT with VTIMEZONE
pub const VEVENT_WITH_TIMEZONE: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:America/New_York\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19971026T020000\r\n\
TZOFFSETFROM:-0400\r\n\
TZOFFSETTO:-0500\r\n\
TZNAME:EST\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:19980301T020000\r\n\
TZOFFSETFROM:-0500\r\n\
TZOFFSETTO:-0400\r\n\
TZNAME:EDT\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123407@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART;TZID=America/New_York:19970903T163000\r\n\
SUMMARY:Conference Call\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// VEVENT with attendees and quoted parameters
pub const VEVENT_WITH_ATTENDEES: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Example//Example//EN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123408@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
SUMMARY:Project Meeting\r\n\
ORGANIZER;CN=\"Boss, The\":mailto:boss@example.com\r\n\
ATTENDEE;PARTSTAT=ACCEPTED;CN=Employee One:mailto:employee1@example.com\r\n\
ATTENDEE;PARTSTAT=TENTATIVE;DELEGATED-FROM=\"mailto:a@example.com\",\"mailto:b@example.com\":mailto:employee2@example.com\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

/// Folded, escaped text in lowercase with bare LF endings
pub const VEVENT_FOLDED_LF: &str = "\
begin:vcalendar\n\
version:2.0\n\
prodid:-//Example//Example//EN\n\
begin:vevent\n\
uid:folded@example.com\n\
description:Agenda\\, part one\\; part two\\nNext line of a description th\n at wraps across \n\tthree physical lines\n\
end:vevent\n\
end:vcalendar\n";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::{Component, ComponentKind, Property};
    use crate::rfc::ical::parse::parse;

    #[test]
    fn parse_vevent_minimal() {
        let ical = parse(VEVENT_MINIMAL).unwrap();
        assert_eq!(ical.version(), Some("2.0"));
        assert_eq!(ical.events().len(), 1);
        assert_eq!(ical.events()[0].summary(), Some("Annual Employee Review"));
    }

    #[test]
    fn parse_vevent_recurring() {
        let ical = parse(VEVENT_RECURRING).unwrap();
        let event = ical.events()[0];
        assert_eq!(
            event.get_property("RRULE").map(Property::value),
            Some("FREQ=WEEKLY;COUNT=10;BYDAY=FR")
        );
        assert_eq!(
            event.get_property("EXDATE").map(Property::value),
            Some("19970912T090000Z,19970919T090000Z")
        );
    }

    #[test]
    fn parse_vtodo_basic() {
        let ical = parse(VTODO_BASIC).unwrap();
        assert_eq!(ical.todos().len(), 1);
        assert!(ical.events().is_empty());
    }

    #[test]
    fn parse_vjournal_basic() {
        let ical = parse(VJOURNAL_BASIC).unwrap();
        assert_eq!(ical.journals().len(), 1);
    }

    #[test]
    fn parse_vfreebusy_request() {
        let ical = parse(VFREEBUSY_REQUEST).unwrap();
        assert_eq!(ical.freebusy().len(), 1);
    }

    #[test]
    fn parse_vevent_with_alarm() {
        let ical = parse(VEVENT_WITH_ALARM).unwrap();
        let event = ical.events()[0];
        assert_eq!(event.children().len(), 1);
        assert_eq!(
            event.alarms()[0].description(),
            Some("Reminder: Meeting in 15 minutes")
        );
    }

    #[test]
    fn parse_vevent_with_timezone() {
        let ical = parse(VEVENT_WITH_TIMEZONE).unwrap();
        assert_eq!(ical.timezones().len(), 1);
        assert_eq!(ical.events().len(), 1);

        let tz = ical.timezones()[0];
        let kinds: Vec<ComponentKind> = tz.children().iter().map(Component::kind).collect();
        assert_eq!(kinds, [ComponentKind::Standard, ComponentKind::Daylight]);

        let dtstart = ical.events()[0].get_property("DTSTART").unwrap();
        assert_eq!(dtstart.get_param_value("TZID"), Some("America/New_York"));
    }

    #[test]
    fn parse_vevent_with_attendees() {
        let ical = parse(VEVENT_WITH_ATTENDEES).unwrap();
        let event = ical.events()[0];

        assert_eq!(
            event.get_property("ORGANIZER").unwrap().get_param_value("CN"),
            Some("Boss, The")
        );

        let attendees = event.get_properties("ATTENDEE");
        assert_eq!(attendees.len(), 2);
        assert_eq!(attendees[0].get_param_value("CN"), Some("Employee One"));
        assert_eq!(
            attendees[1].get_param_values("DELEGATED-FROM"),
            ["mailto:a@example.com", "mailto:b@example.com"]
        );
    }

    #[test]
    fn parse_vevent_folded_lf() {
        let ical = parse(VEVENT_FOLDED_LF).unwrap();
        let event = ical.events()[0];
        assert_eq!(
            event.description(),
            Some(
                "Agenda, part one; part two\nNext line of a description that wraps across \
                 three physical lines"
            )
        );
    }
}
