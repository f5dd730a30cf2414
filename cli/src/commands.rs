use crate::formatters::{
    format_age, format_heart_rate, format_oxygen, format_tier, format_timestamp,
    write_history_table,
};
use crate::SignupArgs;
use anyhow::{bail, Context, Result};
use automedic_engine::application::UseCaseRegistry;
use automedic_engine::constants::display::NO_DATA;
use automedic_engine::domain::{
    DomainError, LoginCommand, Role, SignupCommand, SignupField, VitalHistoryQuery,
};
use colored::*;

fn require_session(error: DomainError) -> anyhow::Error {
    match error {
        DomainError::Unauthenticated => {
            anyhow::anyhow!("not logged in; run `automedic login` first")
        }
        other => other.into(),
    }
}

pub async fn handle_login(
    registry: &UseCaseRegistry,
    email: String,
    password: String,
    role: Role,
) -> Result<()> {
    let identity = registry
        .login()
        .execute(LoginCommand::new(email, password, role))
        .await
        .context("Login failed")?;

    println!(
        "Logged in as {} ({})",
        identity.display_name().bold(),
        identity.role
    );
    println!("Dashboard: {}", identity.role.dashboard_path());
    Ok(())
}

/// Map CLI flags onto the typed signup form
pub fn build_signup_command(args: SignupArgs) -> SignupCommand {
    let password_confirm = args
        .password_confirm
        .unwrap_or_else(|| args.password.clone());

    let mut command = SignupCommand::new(args.role);
    command
        .set(SignupField::Email, args.email)
        .set(SignupField::Password, args.password)
        .set(SignupField::PasswordConfirm, password_confirm)
        .set(SignupField::FirstName, args.first_name)
        .set(SignupField::LastName, args.last_name)
        .set(SignupField::PhoneNumber, args.phone_number)
        .set(SignupField::DateOfBirth, args.date_of_birth);

    let optional = [
        (SignupField::AddressStreet, args.street),
        (SignupField::AddressCity, args.city),
        (SignupField::AddressState, args.state),
        (SignupField::AddressZipCode, args.zip_code),
        (SignupField::AddressCountry, args.country),
        (SignupField::DoctorSpecialty, args.specialty),
        (SignupField::DoctorHospital, args.hospital),
        (SignupField::MedicalHistory, args.medical_history),
        (SignupField::EmergencyContactName, args.emergency_name),
        (SignupField::EmergencyContactPhoneNumber, args.emergency_phone),
        (
            SignupField::EmergencyContactRelationship,
            args.emergency_relationship,
        ),
        (SignupField::EmergencyContactEmail, args.emergency_email),
    ];
    for (field, value) in optional {
        if let Some(value) = value {
            command.set(field, value);
        }
    }

    command
}

pub async fn handle_signup(registry: &UseCaseRegistry, args: SignupArgs) -> Result<()> {
    let command = build_signup_command(args);
    let response = registry
        .signup()
        .execute(command)
        .await
        .context("Signup failed")?;

    println!(
        "Registered {} as {}",
        response.user.display_name().bold(),
        response.user.role
    );
    if response.token.is_none() {
        println!("No token was issued; run `automedic login` to fetch data");
    }
    Ok(())
}

pub async fn handle_logout(registry: &UseCaseRegistry) -> Result<()> {
    let was_logged_in = registry.session().is_authenticated().await;
    registry.logout().execute().await?;

    if was_logged_in {
        println!("Logged out");
    } else {
        println!("No active session");
    }
    Ok(())
}

pub async fn handle_whoami(registry: &UseCaseRegistry) -> Result<()> {
    let Some(session) = registry.session().session().await else {
        println!("Not logged in");
        return Ok(());
    };

    let identity = &session.identity;
    println!("Name:   {}", identity.display_name());
    println!("Email:  {}", identity.email);
    println!("Role:   {}", identity.role);
    println!("ID:     {}", identity.id);
    println!(
        "Token:  {}",
        if session.token.is_some() {
            "present".green()
        } else {
            "missing".yellow()
        }
    );
    Ok(())
}

pub async fn handle_dashboard(registry: &UseCaseRegistry) -> Result<()> {
    if let Some(identity) = registry.session().identity().await {
        if !identity.is_doctor() {
            bail!("the patient roster is only available to doctors");
        }
    }

    let dashboard = registry
        .refresh_dashboard()
        .execute()
        .await
        .map_err(require_session)?;

    let summary = dashboard.summary;
    println!(
        "Total Patients: {}   Active Patients: {}   Critical Patients: {}",
        summary.total.to_string().bold(),
        summary.active.to_string().bold(),
        summary.critical.to_string().red().bold()
    );
    if !dashboard.roster_available {
        println!("{}", "Patient roster could not be loaded".yellow());
    }
    if !dashboard.readings_available {
        println!("{}", "Vital readings could not be loaded".yellow());
    }

    if dashboard.patients.is_empty() {
        println!("No patients");
        return Ok(());
    }

    println!();
    println!(
        "{:<24}  {:<28}  {:<5}  {:<9}  {:<9}  {:<8}  {:<19}",
        "ID", "NAME", "AGE", "HR (BPM)", "SPO2 (%)", "STATUS", "LAST UPDATE"
    );
    println!(
        "{:-<24}  {:-<28}  {:-<5}  {:-<9}  {:-<9}  {:-<8}  {:-<19}",
        "", "", "", "", "", "", ""
    );

    for p in &dashboard.patients {
        let mut name = p.display_name.clone();
        if name.chars().count() > 28 {
            name = name.chars().take(25).collect();
            name.push_str("...");
        }

        println!(
            "{:<24}  {:<28}  {:<5}  {:<9}  {:<9}  {:<8}  {:<19}",
            p.patient_id,
            name,
            format_age(p.age),
            format_heart_rate(p.heart_rate()),
            format_oxygen(p.oxygen_percentage()),
            format_tier(p.status),
            p.last_update()
                .map(format_timestamp)
                .unwrap_or_else(|| NO_DATA.to_string()),
        );
    }

    println!();
    Ok(())
}

pub async fn handle_history(registry: &UseCaseRegistry, patient_id: String) -> Result<()> {
    let dashboard = registry
        .refresh_dashboard()
        .execute()
        .await
        .map_err(require_session)?;

    let history = match registry
        .get_vital_history()
        .execute(VitalHistoryQuery::for_patient(&patient_id))
        .await
    {
        Ok(history) => history,
        Err(DomainError::PatientNotFound(id)) => bail!("no patient with id '{}'", id),
        Err(e) => return Err(require_session(e)),
    };

    if let Some(p) = dashboard.patients.iter().find(|p| p.patient_id == patient_id) {
        println!("\n{}", p.display_name.bold());
        println!("{}", "─".repeat(60));
        println!("  Status:          {}", format_tier(p.status));
        println!("  Age:             {}", format_age(p.age));
        println!("  Email:           {}", p.email);
        println!("  Phone:           {}", p.phone_number);
        println!("  Address:         {}", p.address);
        println!("  Condition:       {}", p.condition);
        println!("  Active:          {}", if p.active { "yes" } else { "no" });
        if let Some(created_at) = p.created_at {
            println!("  Registered:      {}", format_timestamp(created_at));
        }
        if let Some(contact) = &p.emergency_contact {
            println!("\nEMERGENCY CONTACT");
            println!("  Name:            {}", contact.name);
            println!("  Relationship:    {}", contact.relationship);
            println!("  Phone:           {}", contact.phone_number);
            println!("  Email:           {}", contact.email);
        }
    }

    println!("\nVITAL HISTORY");
    if history.entries.is_empty() {
        println!("  No readings recorded");
        return Ok(());
    }

    let mut out = std::io::stdout().lock();
    write_history_table(&mut out, &history)?;
    Ok(())
}
