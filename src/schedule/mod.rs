//! Arrival board: a feed interface, the random placeholder feed and the board state the
//! schedule tab renders.

use chrono::{DateTime, Duration, Local};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::BOARD;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{ArrivalStatus, TrainScheduleEntry};

/// Whether the board belongs to the whole network or to the picked station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BoardScope {
    /// One board per mount; picking another station keeps it
    #[default]
    Network,
    /// Picking another station rebuilds the board
    Station,
}

#[derive(Debug, Clone, Copy)]
enum StatusDraw {
    OnTime,
    Arriving,
    Delayed,
}

// Uniform draw over this wheel gives 60% on time, 20% arriving, 20% delayed.
const STATUS_WHEEL: [StatusDraw; 5] = [
    StatusDraw::OnTime,
    StatusDraw::OnTime,
    StatusDraw::OnTime,
    StatusDraw::Arriving,
    StatusDraw::Delayed,
];

/// Builds a placeholder board of `BOARD.entries` trains, one every
/// `BOARD.minutes_between_trains` minutes starting at `now`.
pub fn generate_board(
    now: DateTime<Local>,
    destinations: &[&str],
    rng: &mut dyn RngCore,
) -> Vec<TrainScheduleEntry> {
    (0..BOARD.entries)
        .map(|i| {
            let draw = STATUS_WHEEL[rng.gen_range(0..STATUS_WHEEL.len())];
            let destination = destinations
                .choose(rng)
                .map(|d| d.to_string())
                .unwrap_or_default();
            let platform = rng.gen_range(1..=BOARD.platforms);
            let status = match draw {
                StatusDraw::OnTime => ArrivalStatus::OnTime,
                StatusDraw::Arriving => ArrivalStatus::Arriving,
                StatusDraw::Delayed => ArrivalStatus::Delayed {
                    minutes: rng.gen_range(BOARD.min_delay_minutes..=BOARD.max_delay_minutes),
                },
            };

            TrainScheduleEntry {
                time: now + Duration::minutes(i as i64 * BOARD.minutes_between_trains),
                destination,
                platform,
                status,
            }
        })
        .collect()
}

/// Source of arrival boards. A live data feed would implement this too.
pub trait ArrivalFeed {
    fn board(&mut self, station: &str, now: DateTime<Local>) -> Vec<TrainScheduleEntry>;
}

/// Random placeholder feed. Destinations are network-wide and ignore `station`.
pub struct RandomArrivalFeed {
    destinations: Vec<&'static str>,
    rng: ChaCha8Rng,
}

impl RandomArrivalFeed {
    pub fn new(destinations: Vec<&'static str>, seed: u64) -> Self {
        Self {
            destinations,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl ArrivalFeed for RandomArrivalFeed {
    fn board(&mut self, _station: &str, now: DateTime<Local>) -> Vec<TrainScheduleEntry> {
        generate_board(now, &self.destinations, &mut self.rng)
    }
}

/// State behind the schedule tab.
pub struct ScheduleBoard {
    feed: Box<dyn ArrivalFeed>,
    stations: Vec<&'static str>,
    selected: &'static str,
    scope: BoardScope,
    entries: Vec<TrainScheduleEntry>,
}

impl ScheduleBoard {
    /// Mounts the board on the first station of `stations` and generates it once.
    pub fn new(
        mut feed: Box<dyn ArrivalFeed>,
        stations: Vec<&'static str>,
        scope: BoardScope,
        now: DateTime<Local>,
    ) -> Self {
        let selected = stations.first().copied().unwrap_or_default();
        let entries = feed.board(selected, now);
        Self {
            feed,
            stations,
            selected,
            scope,
            entries,
        }
    }

    pub fn stations(&self) -> &[&'static str] {
        &self.stations
    }

    pub fn selected_station(&self) -> &'static str {
        self.selected
    }

    pub fn entries(&self) -> &[TrainScheduleEntry] {
        &self.entries
    }

    /// Returns true if the board was rebuilt. Unknown names are ignored.
    pub fn select_station(&mut self, name: &str, now: DateTime<Local>) -> bool {
        let Some(station) = self.stations.iter().copied().find(|s| *s == name) else {
            return false;
        };
        if station == self.selected {
            return false;
        }
        self.selected = station;

        match self.scope {
            BoardScope::Network => false,
            BoardScope::Station => {
                self.refresh(now);
                true
            }
        }
    }

    pub fn refresh(&mut self, now: DateTime<Local>) {
        self.entries = self.feed.board(self.selected, now);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_schedule_generation {
            log::info!(
                "Arrival board rebuilt for {} ({} trains)",
                self.selected,
                self.entries.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SIX: [&str; 6] = [
        "Центральная",
        "Северная",
        "Южная",
        "Площадь Революции",
        "Западная",
        "Восточная",
    ];

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 17, 8, 0, 0).unwrap()
    }

    fn board(scope: BoardScope) -> ScheduleBoard {
        ScheduleBoard::new(
            Box::new(RandomArrivalFeed::new(SIX.to_vec(), 3)),
            SIX.to_vec(),
            scope,
            fixed_now(),
        )
    }

    #[test]
    fn board_always_has_eight_well_formed_trains() {
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let entries = generate_board(fixed_now(), &SIX, &mut rng);
            assert_eq!(entries.len(), 8);

            for entry in &entries {
                assert!(SIX.contains(&entry.destination.as_str()));
                assert!((1..=2).contains(&entry.platform));
                match entry.status {
                    ArrivalStatus::Delayed { minutes } => {
                        assert!((1..=5).contains(&minutes));
                        assert_eq!(entry.delay(), Some(minutes));
                    }
                    _ => assert_eq!(entry.delay(), None),
                }
            }
        }
    }

    #[test]
    fn trains_are_three_minutes_apart() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let entries = generate_board(fixed_now(), &SIX, &mut rng);
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.time, fixed_now() + Duration::minutes(3 * i as i64));
        }
        assert_eq!(entries[0].time_label(), "08:00");
        assert_eq!(entries[7].time_label(), "08:21");
    }

    #[test]
    fn status_mix_roughly_follows_the_wheel() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut on_time = 0;
        let mut total = 0;
        for _ in 0..500 {
            for entry in generate_board(fixed_now(), &SIX, &mut rng) {
                total += 1;
                if entry.status == ArrivalStatus::OnTime {
                    on_time += 1;
                }
            }
        }
        let share = on_time as f64 / total as f64;
        assert!((0.55..0.65).contains(&share), "on-time share {share}");
    }

    #[test]
    fn network_board_survives_station_change() {
        let mut board = board(BoardScope::Network);
        let before = board.entries().to_vec();

        assert!(!board.select_station("Южная", fixed_now()));
        assert_eq!(board.selected_station(), "Южная");
        assert_eq!(board.entries(), before.as_slice());
    }

    #[test]
    fn station_board_rebuilds_on_station_change() {
        let later = fixed_now() + Duration::minutes(10);
        let mut board = board(BoardScope::Station);

        assert!(board.select_station("Южная", later));
        assert_eq!(board.entries()[0].time, later);
        assert!(!board.select_station("Южная", later));
    }

    #[test]
    fn unknown_station_is_ignored() {
        let mut board = board(BoardScope::Station);
        assert!(!board.select_station("Лесная", fixed_now()));
        assert_eq!(board.selected_station(), "Центральная");
    }
}
