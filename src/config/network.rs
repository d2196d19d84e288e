//! Static metro network table.
//!
//! Row order is the order the route pickers list stations in.

use crate::domain::{Line, Station, StationId};

pub const STATIONS: &[Station] = &[
    Station { id: StationId(1), name: "Центральная", line: Line::Red, x: 50.0, y: 30.0, transfers: &[StationId(4)] },
    Station { id: StationId(2), name: "Северная", line: Line::Red, x: 50.0, y: 15.0, transfers: &[] },
    Station { id: StationId(3), name: "Южная", line: Line::Red, x: 50.0, y: 45.0, transfers: &[] },
    Station { id: StationId(4), name: "Площадь Революции", line: Line::Blue, x: 30.0, y: 30.0, transfers: &[StationId(1)] },
    Station { id: StationId(5), name: "Западная", line: Line::Blue, x: 15.0, y: 30.0, transfers: &[] },
    Station { id: StationId(6), name: "Восточная", line: Line::Blue, x: 70.0, y: 30.0, transfers: &[] },
    Station { id: StationId(7), name: "Парковая", line: Line::Green, x: 30.0, y: 60.0, transfers: &[] },
    Station { id: StationId(8), name: "Лесная", line: Line::Green, x: 50.0, y: 70.0, transfers: &[] },
    Station { id: StationId(9), name: "Озёрная", line: Line::Green, x: 70.0, y: 60.0, transfers: &[] },
    Station { id: StationId(10), name: "Университет", line: Line::Yellow, x: 20.0, y: 50.0, transfers: &[] },
    Station { id: StationId(11), name: "Театральная", line: Line::Purple, x: 60.0, y: 50.0, transfers: &[] },
];

/// Station order along each line, end to end.
pub const LINE_SEQUENCES: &[(Line, &[StationId])] = &[
    (Line::Red, &[StationId(2), StationId(1), StationId(3)]),
    (Line::Blue, &[StationId(5), StationId(4), StationId(6)]),
    (Line::Green, &[StationId(7), StationId(8), StationId(9)]),
    (Line::Yellow, &[StationId(10)]),
    (Line::Purple, &[StationId(11)]),
];

/// Static operating hours shown on the map info panel and the schedule tab.
pub struct OperatingHours {
    pub first_train: &'static str,
    pub last_train: &'static str,
    pub weekday: &'static str,
    pub weekend: &'static str,
    pub interval: &'static str,
}

pub const OPERATING_HOURS: OperatingHours = OperatingHours {
    first_train: "05:30",
    last_train: "01:00",
    weekday: "05:30 - 01:00",
    weekend: "06:00 - 01:00",
    interval: "2-3 мин",
};
