#[cfg(test)]
mod tests {
    use chrono::{Datelike, Local, NaiveDate};
    use person_model::{ModelConfig, ModelError, PersonRecord, Student};

    /// Create a test student admitted in 2022
    fn sample_student() -> Student {
        Student::new(
            "Олена".to_string(),
            "Коваленко".to_string(),
            "Петрівна".to_string(),
            NaiveDate::from_ymd_opt(2004, 9, 20).unwrap(),
            2022,
            "Комп'ютерні науки".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_course_after_september_rollover() {
        let student = sample_student();

        assert_eq!(
            student.course_at(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()),
            2
        );
    }

    #[test]
    fn test_course_before_september_rollover() {
        let student = sample_student();

        assert_eq!(
            student.course_at(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            1
        );
    }

    #[test]
    fn test_course_in_admission_year() {
        let student = sample_student();

        // Spring of the admission year is still course zero
        assert_eq!(
            student.course_at(NaiveDate::from_ymd_opt(2022, 3, 1).unwrap()),
            0
        );
        // Autumn of the admission year as well
        assert_eq!(
            student.course_at(NaiveDate::from_ymd_opt(2022, 10, 1).unwrap()),
            0
        );
        // First spring after admission
        assert_eq!(
            student.course_at(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()),
            0
        );
        // First autumn after admission
        assert_eq!(
            student.course_at(NaiveDate::from_ymd_opt(2023, 10, 1).unwrap()),
            1
        );
    }

    #[test]
    fn test_course_reference_before_admission() {
        let student = sample_student();

        assert_eq!(
            student.course_at(NaiveDate::from_ymd_opt(2021, 5, 1).unwrap()),
            0
        );
    }

    #[test]
    fn test_admission_year_bounds() {
        let birth = NaiveDate::from_ymd_opt(2004, 9, 20).unwrap();
        let current_year = Local::now().year();

        let error = Student::new(
            "Олена".to_string(),
            "Коваленко".to_string(),
            "Петрівна".to_string(),
            birth,
            1899,
            "Комп'ютерні науки".to_string(),
        )
        .unwrap_err();
        assert!(matches!(error, ModelError::AdmissionYearOutOfRange { .. }));

        let error = Student::new(
            "Олена".to_string(),
            "Коваленко".to_string(),
            "Петрівна".to_string(),
            birth,
            current_year + 2,
            "Комп'ютерні науки".to_string(),
        )
        .unwrap_err();
        assert!(matches!(error, ModelError::AdmissionYearOutOfRange { .. }));

        // Next year's admission is within bounds
        let student = Student::new(
            "Олена".to_string(),
            "Коваленко".to_string(),
            "Петрівна".to_string(),
            birth,
            current_year + 1,
            "Комп'ютерні науки".to_string(),
        );
        assert!(student.is_ok());
    }

    #[test]
    fn test_blank_specialty_rejected() {
        let error = Student::new(
            "Олена".to_string(),
            "Коваленко".to_string(),
            "Петрівна".to_string(),
            NaiveDate::from_ymd_opt(2004, 9, 20).unwrap(),
            2022,
            "   ".to_string(),
        )
        .unwrap_err();

        assert!(matches!(error, ModelError::BlankField { field: "specialty" }));
    }

    #[test]
    fn test_set_admission_year_revalidates() {
        let mut student = sample_student();

        student.set_admission_year(2023).unwrap();
        assert_eq!(student.admission_year(), 2023);

        let error = student.set_admission_year(1899).unwrap_err();
        assert!(matches!(error, ModelError::AdmissionYearOutOfRange { .. }));
        assert_eq!(student.admission_year(), 2023);
    }

    #[test]
    fn test_set_admission_year_respects_config_bounds() {
        let config = ModelConfig {
            min_birth_year: 1950,
            admission_year_headroom: 0,
            ..ModelConfig::default()
        };
        let mut student = sample_student();

        let error = student
            .set_admission_year_with_config(&config, 1949)
            .unwrap_err();
        assert!(matches!(
            error,
            ModelError::AdmissionYearOutOfRange { min: 1950, .. }
        ));

        // Zero headroom excludes next year's admission
        let error = student
            .set_admission_year_with_config(&config, Local::now().year() + 1)
            .unwrap_err();
        assert!(matches!(error, ModelError::AdmissionYearOutOfRange { .. }));

        student.set_admission_year_with_config(&config, 2020).unwrap();
        assert_eq!(student.admission_year(), 2020);
    }

    #[test]
    fn test_set_specialty_rejects_blank() {
        let mut student = sample_student();

        student.set_specialty("Математика".to_string()).unwrap();
        assert_eq!(student.specialty(), "Математика");

        let error = student.set_specialty("   ".to_string()).unwrap_err();
        assert!(matches!(error, ModelError::BlankField { field: "specialty" }));
        assert_eq!(student.specialty(), "Математика");
    }

    #[test]
    fn test_set_student_data_replaces_all_fields() {
        let mut student = sample_student();

        student
            .set_student_data(
                "Марія".to_string(),
                "Шевченко".to_string(),
                "Іванівна".to_string(),
                NaiveDate::from_ymd_opt(2003, 3, 10).unwrap(),
                2021,
                "Інформаційні технології".to_string(),
            )
            .unwrap();

        assert_eq!(student.identity().last_name(), "Шевченко");
        assert_eq!(student.admission_year(), 2021);
        assert_eq!(student.specialty(), "Інформаційні технології");
        assert_eq!(
            student
                .age_at(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap())
                .unwrap(),
            21
        );
        assert_eq!(
            student.course_at(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()),
            3
        );
    }

    #[test]
    fn test_failed_set_student_data_leaves_record_unchanged() {
        let mut student = sample_student();

        let error = student.set_student_data(
            "Марія".to_string(),
            "Шевченко".to_string(),
            "Іванівна".to_string(),
            NaiveDate::from_ymd_opt(2003, 3, 10).unwrap(),
            1800,
            "Інформаційні технології".to_string(),
        );

        assert!(error.is_err());
        assert_eq!(student.identity().last_name(), "Коваленко");
        assert_eq!(student.admission_year(), 2022);
        assert_eq!(student.specialty(), "Комп'ютерні науки");
    }

    #[test]
    fn test_student_age_boundary() {
        let student = sample_student();

        assert_eq!(
            student
                .age_at(NaiveDate::from_ymd_opt(2024, 9, 19).unwrap())
                .unwrap(),
            19
        );
        assert_eq!(
            student
                .age_at(NaiveDate::from_ymd_opt(2024, 9, 20).unwrap())
                .unwrap(),
            20
        );
    }

    #[test]
    fn test_student_formatted_info_projection() {
        let student = sample_student();
        let info = student.formatted_info();

        assert!(info.contains("Student"));
        assert!(info.contains("Коваленко Олена Петрівна"));
        assert!(info.contains("2022"));
        assert!(info.contains("Комп'ютерні науки"));
    }

    #[test]
    fn test_letter_count_in_student_surname() {
        let student = sample_student();

        assert_eq!(student.count_letter_in_last_name('к'), 2);
        assert_eq!(student.count_letter_in_last_name('К'), 2);
    }
}
