//! Prints the NREL SPA reference case, Golden, Colorado on 2003-10-17 at 12:30:30 MST.
//!
//! Run with `RUST_LOG=trace` to see each pipeline stage.

use nrel_spa::{spa, ObservationRequest, SunriseResult};

fn print_event(label: &str, hours: f64) {
    let (h, m, s) = nrel_spa::LocalHours::from_hours(hours).hms();
    println!("{label:<20} {h:02}:{m:02}:{s:02} Local Time");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let request = ObservationRequest::new(2003, 10, 17, 12, 30, 30.0, -105.1786, 39.742476)
        .with_timezone(-7.0)
        .with_delta_ut1(0.0)
        .with_delta_t(67.0)
        .with_elevation(1830.14)
        .with_pressure(820.0)
        .with_temperature(11.0)
        .with_slope(30.0)
        .with_azimuth_rotation(-10.0)
        .with_atmospheric_refraction(0.5667);

    let output = spa::calculate(&request)?;

    println!("Julian Day:    {:.6}", output.jd());
    println!("L:             {:.6e} degrees", output.l());
    println!("B:             {:.6e} degrees", output.b());
    println!("R:             {:.6} AU", output.r());
    println!("H:             {:.6} degrees", output.h());
    println!("Delta Psi:     {:.6e} degrees", output.delta_psi());
    println!("Delta Epsilon: {:.6e} degrees", output.delta_epsilon());
    println!("Epsilon:       {:.6} degrees", output.epsilon());
    println!("Zenith:        {:.6} degrees", output.zenith());
    println!("Azimuth:       {:.6} degrees", output.azimuth());
    if let Some(incidence) = output.incidence() {
        println!("Incidence:     {incidence:.6} degrees");
    }

    let Some(rts) = output.rise_transit_set() else {
        return Ok(());
    };
    println!("EOT:           {:.6} minutes", rts.eot());

    match rts.events() {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            print_event("Sunrise:", sunrise.hours());
            print_event("Sun transit:", transit.hours());
            print_event("Sunset:", sunset.hours());
        }
        SunriseResult::AllDay => println!("The sun stays up all day"),
        SunriseResult::AllNight => println!("The sun stays down all day"),
    }

    Ok(())
}
