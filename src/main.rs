use clap::Parser;
use student_records::utils::{logger, validation::Validate};
use student_records::{
    CliConfig, DoctoralStudent, GraduateStudent, Student, StudentIdentity, StudentRecord,
    StudentRegistry, UndergraduateStudent,
};

fn sample_cohort() -> Vec<StudentRecord> {
    vec![
        UndergraduateStudent::new(
            StudentIdentity::new(
                "20231001",
                "Ahmet Yilmaz",
                "ahmet.yilmaz@university.edu",
                "Computer Science",
                2022,
            ),
            3,
            3.45,
        )
        .into(),
        UndergraduateStudent::new(
            StudentIdentity::new(
                "20231002",
                "Zeynep Kaya",
                "zeynep.kaya@university.edu",
                "Mathematics",
                2023,
            ),
            2,
            3.87,
        )
        .into(),
        GraduateStudent::new(
            StudentIdentity::new(
                "20201101",
                "Mehmet Ozturk",
                "mehmet.ozturk@university.edu",
                "Computer Science",
                2022,
            ),
            "Machine Learning Applications in Healthcare",
            "Prof. Dr. Ali Demir",
        )
        .into(),
        DoctoralStudent::new(
            StudentIdentity::new(
                "20191001",
                "Fatima Hassan",
                "fatima.hassan@university.edu",
                "Physics",
                2019,
            ),
            "Quantum Computing and Cryptography",
            "Quantum Information Science",
            8,
        )
        .into(),
    ]
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if config.json_logs() {
        logger::init_json_logger(&config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }
    tracing::info!("Starting student-records");
    tracing::debug!("Effective config: {:?}", config);

    let clock = config.clock();
    let mut registry = StudentRegistry::new();
    for record in sample_cohort() {
        if let Err(e) = record.validate() {
            tracing::warn!("Student {} has invalid data: {}", record.student_id(), e);
        }
        registry.add(record)?;
    }

    let selected: Vec<&StudentRecord> = match &cli.department {
        Some(department) => registry.by_department(department).collect(),
        None => registry.iter().collect(),
    };
    tracing::info!("Reporting on {} of {} students", selected.len(), registry.len());

    let rule = "─".repeat(70);
    for (i, record) in selected.iter().enumerate() {
        println!("{}", rule);
        println!("STUDENT {}/{}", i + 1, selected.len());
        println!("{}", rule);
        println!("{}", record.display_info_at(&*clock));
        println!();
    }

    println!("{}", "=".repeat(70));
    println!("SYSTEM SUMMARY");
    println!("{}", "=".repeat(70));
    println!(
        "{}",
        student_records::RosterSummary::from_records(selected.iter().copied())
    );

    Ok(())
}
