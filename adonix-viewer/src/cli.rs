use std::env;
use std::process;

use getopts::Options;

pub struct Args {
    pub endpoint: String,
    pub day: Option<String>,
    pub search: Option<String>,
    pub export: Option<String>,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "e",
        "endpoint",
        "Schedule endpoint to fetch from [Default: the hosted HackIllinois API]",
        "URL",
    );
    opts.optopt(
        "d",
        "day",
        "Print the schedule for one weekday and exit",
        "DAY",
    );
    opts.optopt(
        "s",
        "search",
        "Print events whose name contains TEXT and exit",
        "TEXT",
    );
    opts.optopt(
        "x",
        "export",
        "Write the full schedule as an iCalendar file and exit",
        "FILE",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let endpoint = matches
        .opt_str("endpoint")
        .unwrap_or_else(|| adonix_schedule::SCHEDULE_ENDPOINT.to_string());

    Args {
        endpoint,
        day: matches.opt_str("day"),
        search: matches.opt_str("search"),
        export: matches.opt_str("export"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_defaults_to_the_hosted_api() {
        let args = parse(Vec::new());
        assert_eq!(args.endpoint, adonix_schedule::SCHEDULE_ENDPOINT);
        assert!(args.day.is_none());
        assert!(args.search.is_none());
        assert!(args.export.is_none());
    }

    #[test]
    fn parses_one_shot_flags() {
        let args = parse(vec![
            "--day".to_string(),
            "Friday".to_string(),
            "-s".to_string(),
            "keynote".to_string(),
            "-x".to_string(),
            "schedule.ics".to_string(),
        ]);

        assert_eq!(args.day.as_deref(), Some("Friday"));
        assert_eq!(args.search.as_deref(), Some("keynote"));
        assert_eq!(args.export.as_deref(), Some("schedule.ics"));
    }

    #[test]
    fn parses_endpoint_override() {
        let args = parse(vec![
            "-e".to_string(),
            "http://localhost:8080/event/".to_string(),
        ]);
        assert_eq!(args.endpoint, "http://localhost:8080/event/");
    }
}
