//! Interactive menu over stdin/stdout. All decisions are delegated to the engine.

use std::io::{self, BufRead, Write};

use bayline_core::ParkingEngine;

use crate::handlers::{parse_class, validate_plate};

const MENU: &str = "\n----- Bayline Parking CLI -----\n\
1. Enter Vehicle\n\
2. Exit Vehicle\n\
3. Display Status\n\
4. Exit Program\n\
Choose an option: ";

pub fn run<R: BufRead, W: Write>(
    engine: &mut ParkingEngine,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    loop {
        write!(out, "{}", MENU)?;
        out.flush()?;

        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match choice.as_str() {
            "1" => enter_vehicle(engine, &mut input, &mut out)?,
            "2" => exit_vehicle(engine, &mut input, &mut out)?,
            "3" => display_status(engine, &mut out)?,
            "4" => {
                writeln!(out, "Exiting. Thank you for using Bayline.")?;
                break;
            }
            _ => writeln!(out, "Invalid option. Please try again.")?,
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    read_line(input)
}

fn enter_vehicle<R: BufRead, W: Write>(
    engine: &mut ParkingEngine,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(plate) = prompt(input, out, "Enter vehicle plate number: ")? else {
        return Ok(());
    };
    let plate = match validate_plate(&plate) {
        Ok(plate) => plate.to_string(),
        Err(e) => return writeln!(out, "{}", e),
    };

    let Some(class) = prompt(
        input,
        out,
        "Enter vehicle type (0: Car, 1: Bike, 2: Truck, 3: Emergency, 4: Eco-Friendly): ",
    )?
    else {
        return Ok(());
    };
    let class = match parse_class(&class) {
        Ok(class) => class,
        Err(e) => return writeln!(out, "{}", e),
    };

    match engine.allocate(&plate, class) {
        Ok(receipt) => {
            write!(out, "Vehicle {} entered. Rate: Rs. {}/hr", plate, receipt.rate)?;
            if receipt.discount_applied {
                write!(out, " (including membership discount)")?;
            }
            writeln!(out, ". Assigned spot: {}", receipt.spot)
        }
        Err(e) => writeln!(out, "{}", e),
    }
}

fn exit_vehicle<R: BufRead, W: Write>(
    engine: &mut ParkingEngine,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let Some(plate) = prompt(input, out, "Enter vehicle plate number to exit: ")? else {
        return Ok(());
    };

    let plate = match validate_plate(&plate) {
        Ok(plate) => plate.to_string(),
        Err(e) => return writeln!(out, "{}", e),
    };

    let summary = match engine.release(&plate) {
        Ok(summary) => summary,
        Err(e) => return writeln!(out, "{}", e),
    };

    writeln!(
        out,
        "Vehicle {} stayed for {:.2} hours.",
        summary.client_id, summary.hours_stayed
    )?;
    if summary.overstayed {
        writeln!(out, "NOTE: TTL expired. Vehicle overstayed.")?;
    }
    writeln!(out, "Total charge: Rs. {}", summary.charge)?;
    writeln!(out, "Spot number {} is now available.", summary.freed_spot)?;

    if summary.offer_enrollment {
        let answer = prompt(
            input,
            out,
            "Would you like to register for a membership for future discounts (y/n)? ",
        )?;
        if matches!(answer.as_deref(), Some("y" | "Y")) {
            engine.enroll(&summary.client_id);
            writeln!(
                out,
                "Membership registered. You will get a {}% discount from now on.",
                engine.discount_fraction() * 100.0
            )?;
        }
    }
    Ok(())
}

fn display_status<W: Write>(engine: &ParkingEngine, out: &mut W) -> io::Result<()> {
    let occupancy = engine.occupancy();
    writeln!(out, "\nOccupied: {}/{}", occupancy.occupied, occupancy.capacity)?;
    writeln!(out, "Currently Parked Vehicles:")?;
    for row in &engine.snapshot() {
        write!(out, " - {} (Rate/hr: Rs. {}, Spot: {})", row.client_id, row.rate, row.spot)?;
        if row.overstayed {
            write!(out, " [TTL EXPIRED]")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}
