use std::io::{self, BufRead, Write};

use adonix_schedule::{DisplayRow, EventSource, ExpandedSet, FavoriteSet, ScheduleIndex};

/// Interactive session over the schedule. Every listing command acts like a
/// view activation and performs its own fetch; favorites and expanded state
/// live for the lifetime of the shell.
pub async fn run(source: EventSource) {
    Shell::new(source).run().await;
}

pub fn print_rows(rows: &[DisplayRow], expanded: &ExpandedSet) {
    if rows.is_empty() {
        println!("no events");
        return;
    }

    for (idx, row) in rows.iter().enumerate() {
        let marker = if row.is_favorite { '*' } else { ' ' };
        println!("{:>3} {marker} {}  {}", idx + 1, row.name, row.time_label);

        if expanded.contains(&row.key) && !row.description.is_empty() {
            println!("      {}", row.description);
        }
    }
}

struct Shell {
    source: EventSource,
    index: ScheduleIndex,
    favorites: FavoriteSet,
    expanded: ExpandedSet,
    rows: Vec<DisplayRow>,
}

impl Shell {
    fn new(source: EventSource) -> Self {
        Self {
            source,
            index: ScheduleIndex::new(),
            favorites: FavoriteSet::new(),
            expanded: ExpandedSet::new(),
            rows: Vec::new(),
        }
    }

    async fn run(&mut self) {
        println!("adonix schedule viewer; type `help` for commands");

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush().ok();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
                break;
            }

            if !self.dispatch(line.trim()).await {
                break;
            }
        }
    }

    async fn dispatch(&mut self, line: &str) -> bool {
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "friday" => self.activate_day("Friday").await,
            "saturday" => self.activate_day("Saturday").await,
            "sunday" => self.activate_day("Sunday").await,
            "favorites" => self.activate_favorites().await,
            "search" => self.activate_search(rest).await,
            "fav" => self.toggle_favorite(rest),
            "show" => self.toggle_expanded(rest),
            "export" => self.export(rest).await,
            "help" => help(),
            "quit" | "exit" => return false,
            other => println!("unknown command `{other}`; type `help`"),
        }

        true
    }

    async fn activate_day(&mut self, day: &str) {
        self.index.refresh(&self.source).await;
        let rows = self.index.list_for_day(day, &self.favorites);
        self.show(rows);
    }

    async fn activate_favorites(&mut self) {
        self.index.refresh(&self.source).await;
        let rows = self.index.list_favorites(&self.favorites);
        self.show(rows);
    }

    async fn activate_search(&mut self, text: &str) {
        self.index.refresh(&self.source).await;
        let rows = self.index.search(text, &self.favorites);
        self.show(rows);
    }

    fn show(&mut self, rows: Option<Vec<DisplayRow>>) {
        match rows {
            None => println!("schedule unavailable"),
            Some(rows) => {
                print_rows(&rows, &self.expanded);
                self.rows = rows;
            }
        }
    }

    fn toggle_favorite(&mut self, arg: &str) {
        let Some((key, name)) = self.row_key(arg) else {
            return;
        };

        if self.favorites.toggle(&key) {
            println!("favorited {name}");
        } else {
            println!("unfavorited {name}");
        }
    }

    fn toggle_expanded(&mut self, arg: &str) {
        let Some((key, name)) = self.row_key(arg) else {
            return;
        };

        if self.expanded.toggle(&key) {
            match self.rows.iter().find(|row| row.key == key) {
                Some(row) if !row.description.is_empty() => println!("{}", row.description),
                _ => println!("{name} has no description"),
            }
        } else {
            println!("collapsed {name}");
        }
    }

    async fn export(&mut self, path: &str) {
        if path.is_empty() {
            println!("usage: export FILE");
            return;
        }

        self.index.refresh(&self.source).await;
        let Some(events) = self.index.events() else {
            println!("schedule unavailable");
            return;
        };

        let document = adonix_schedule::to_ics(events).to_string();
        match std::fs::write(path, document) {
            Ok(()) => println!("wrote {path}"),
            Err(err) => println!("failed to write {path}: {err}"),
        }
    }

    /// Resolve a 1-based row number from the last listing into its event id.
    fn row_key(&self, arg: &str) -> Option<(String, String)> {
        let number: usize = match arg.parse() {
            Ok(number) if number >= 1 => number,
            _ => {
                println!("expected a row number from the last listing");
                return None;
            }
        };

        match self.rows.get(number - 1) {
            Some(row) => Some((row.key.clone(), row.name.clone())),
            None => {
                println!("no row {number} in the last listing");
                None
            }
        }
    }
}

fn help() {
    println!("  friday | saturday | sunday   list that day's events");
    println!("  favorites                    list favorited events");
    println!("  search [text]                list events whose name contains text");
    println!("  fav N                        toggle favorite on row N of the last listing");
    println!("  show N                       toggle the description of row N");
    println!("  export FILE                  write the schedule as an iCalendar file");
    println!("  quit                         leave");
}
