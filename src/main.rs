use book_lending::{Book, BookRecord, Clock, FixedClock, LendingError, LoanPolicy, SystemClock};
use clap::Parser;
use tracing::debug;

/// Command-line arguments for the lending demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging of every transition
    #[arg(short, long)]
    verbose: bool,

    /// Lending policy as JSON, e.g. '{"loan_period_days": 21}'
    #[arg(long, default_value = "{}")]
    policy: String,

    /// Days past the due date at which the book comes back
    #[arg(long, default_value_t = 3)]
    late_by: u64,
}

fn main() -> Result<(), LendingError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose { "debug" } else { "info" })
        .with_target(args.verbose)
        .init();

    let policy = LoanPolicy::from_json(&args.policy)?;
    debug!(?policy, "loaded lending policy");

    println!("Book Lending Demonstration");
    println!("==========================\n");

    let clock = SystemClock;
    let mut book = Book::new("Dune", "Frank Herbert", "978-0441013593", Some(1965), &clock);
    println!("New book:       {book}");

    let outcome = book.check_out_with_policy("member-1", &policy, &clock);
    println!("Checkout:       {outcome}");
    println!("Second checkout: {}", book.check_out_default("member-2", &clock));
    println!("Status:         {book}");

    let record = book.to_record();
    let json = record.to_json()?;
    println!("\nStored record:\n{json}\n");

    let mut restored = Book::from_record(BookRecord::from_json(&json)?, &clock);
    println!("Restored:       {restored}");

    // Jump past the due date to show overdue handling
    let late_clock = restored
        .due_date()
        .map(FixedClock::new)
        .and_then(|due| due.advanced_by(args.late_by))
        .unwrap_or_else(|| FixedClock::new(clock.today()));
    println!(
        "On {}: overdue = {}, days overdue = {}",
        late_clock.today(),
        restored.is_overdue(&late_clock),
        restored.days_overdue(&late_clock)
    );

    println!("Return:         {}", restored.return_book(&late_clock));
    println!("Second return:  {}", restored.return_book(&late_clock));
    println!("Status:         {restored}");

    println!("\nDemonstration complete!");
    Ok(())
}
