use anyhow::{Context, bail};
use chrono::{Datelike, Local, NaiveDate};
use person_model::utils::logging::{
    log_calculation, log_demo_step, log_entity_created, log_entity_released,
};
use person_model::{Person, PersonRecord, RegularPerson, Student};
use std::io::{self, Write};

fn main() {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("╔════════════════════════════════════════════════════════╗");
    println!("║   Person and student models demonstration              ║");
    println!("╚════════════════════════════════════════════════════════╝");

    // Validation errors end the demonstration with a single message,
    // not a crash.
    match run_demo() {
        Ok(()) => {
            println!("\n╔════════════════════════════════════════════════════════╗");
            println!("║   Demonstration finished successfully                  ║");
            println!("╚════════════════════════════════════════════════════════╝");
        }
        Err(error) => println!("\nError: {error}"),
    }
}

fn run_demo() -> anyhow::Result<()> {
    log_demo_step("Person information");
    let person = RegularPerson::new(
        "Іван".to_string(),
        "Петренко".to_string(),
        "Миколайович".to_string(),
        NaiveDate::from_ymd_opt(1980, 6, 15).context("invalid sample birth date")?,
        Some("Інженер".to_string()),
    )?;
    log_entity_created(&person.kind().to_string(), person.identity().last_name());
    person.display_info();

    let reference = read_date("\nEnter the reference date for age calculation:")?;

    let person_age = person.age_at(reference)?;
    log_calculation("person age", i64::from(person_age));
    println!(
        "\nAge as of {}: {person_age}",
        reference.format("%d.%m.%Y")
    );

    log_demo_step("Student information");
    let mut student = Student::new(
        "Олена".to_string(),
        "Коваленко".to_string(),
        "Петрівна".to_string(),
        NaiveDate::from_ymd_opt(2004, 9, 20).context("invalid sample birth date")?,
        2022,
        "Комп'ютерні науки".to_string(),
    )?;
    log_entity_created(&student.kind().to_string(), student.identity().last_name());
    student.display_info();

    let student_age = student.age_at(reference)?;
    let course = student.course_at(reference);
    log_calculation("student age", i64::from(student_age));
    log_calculation("student course", i64::from(course));
    println!(
        "\nStudent age as of {}: {student_age}",
        reference.format("%d.%m.%Y")
    );
    println!("Current course: {course}");

    let letter = read_letter("\nEnter a letter to count in the person's last name: ")?;
    println!(
        "Occurrences of '{letter}' in '{}': {}",
        person.identity().last_name(),
        person.count_letter_in_last_name(letter)
    );

    let letter = read_letter("\nEnter a letter to count in the student's last name: ")?;
    println!(
        "Occurrences of '{letter}' in '{}': {}",
        student.identity().last_name(),
        student.count_letter_in_last_name(letter)
    );

    log_demo_step("Updating the student record");
    student.set_student_data(
        "Марія".to_string(),
        "Шевченко".to_string(),
        "Іванівна".to_string(),
        NaiveDate::from_ymd_opt(2003, 3, 10).context("invalid sample birth date")?,
        2021,
        "Інформаційні технології".to_string(),
    )?;
    student.display_info();
    println!("Student age: {}", student.age_at(reference)?);

    log_demo_step("Polymorphic iteration");
    let people: Vec<Person> = vec![person.into(), student.into()];

    for p in &people {
        println!("\nKind: {}", p.kind());
        println!("  Full name: {}", p.identity().full_name());
        println!("  Age: {}", p.age_at(reference)?);
    }

    println!();
    for p in &people {
        println!("{}", p.formatted_info());
    }

    for p in &people {
        log_entity_released(&p.kind().to_string(), p.identity().last_name());
    }

    Ok(())
}

/// Read a trimmed line from stdin, prompting without a newline first
fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

/// Read an integer within a range, re-prompting on bad input
fn read_int(prompt: &str, min: i32, max: i32) -> anyhow::Result<i32> {
    loop {
        match read_line(prompt)?.parse::<i32>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            Ok(_) => println!("The number must be between {min} and {max}"),
            Err(_) => println!("Invalid input, try again."),
        }
    }
}

/// Read a calendar date as three integer prompts, re-prompting until the
/// combination forms a valid date
fn read_date(prompt: &str) -> anyhow::Result<NaiveDate> {
    loop {
        println!("{prompt}");
        let day = read_int("Day (1-31): ", 1, 31)?;
        let month = read_int("Month (1-12): ", 1, 12)?;
        let year = read_int("Year: ", 1900, Local::now().year() + 1)?;

        match NaiveDate::from_ymd_opt(year, month as u32, day as u32) {
            Some(date) => return Ok(date),
            None => println!("Not a valid calendar date, try again.\n"),
        }
    }
}

/// Read a single character, re-prompting on empty input
fn read_letter(prompt: &str) -> anyhow::Result<char> {
    loop {
        match read_line(prompt)?.chars().next() {
            Some(letter) => return Ok(letter),
            None => println!("Enter a single letter."),
        }
    }
}
