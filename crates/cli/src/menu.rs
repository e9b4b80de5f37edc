//! Interactive text menu.
//!
//! Generic over its input and output so a whole session can be scripted.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use uniinv_core::{DomainError, StaffId};
use uniinv_inventory::{ItemKind, NewEquipment};
use uniinv_staff::NewStaffMember;

use crate::config::ReportFormat;
use crate::render;
use crate::service::InventorySystem;

#[derive(Debug, Error)]
enum MenuError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

type MenuResult<T> = Result<T, MenuError>;

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    system: InventorySystem,
    format: ReportFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, system: InventorySystem, format: ReportFormat) -> Self {
        Self {
            input,
            output,
            system,
            format,
        }
    }

    pub fn system(&self) -> &InventorySystem {
        &self.system
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the user exits or input ends. Only terminal I/O errors escape.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_main_menu()?;

            let outcome = self
                .read_number::<u32>("Choose option: ")
                .and_then(|choice| self.dispatch(choice));

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(MenuError::InputClosed) => {
                    self.say("Exiting... Bye!")?;
                    return Ok(());
                }
                Err(MenuError::Domain(e)) => {
                    tracing::warn!(error = %e, "operation failed");
                    self.say(&format!("Error: {e}"))?;
                }
                Err(MenuError::Render(e)) => {
                    tracing::warn!(error = %e, "rendering failed");
                    self.say(&format!("Unexpected error: {e}"))?;
                }
                Err(MenuError::Io(e)) => return Err(e),
            }
        }
    }

    fn print_main_menu(&mut self) -> io::Result<()> {
        self.say(
            "\n===== UNIVERSITY INVENTORY SYSTEM =====\n\
             1. Add new equipment\n\
             2. Register a new staff member\n\
             3. Assign equipment to staff\n\
             4. Return equipment\n\
             5. Search inventory\n\
             6. Generate reports\n\
             7. Maintenance fee quote\n\
             8. Exit",
        )
    }

    fn dispatch(&mut self, choice: u32) -> MenuResult<Flow> {
        match choice {
            1 => self.add_equipment()?,
            2 => self.register_staff()?,
            3 => self.assign()?,
            4 => self.return_item()?,
            5 => self.search()?,
            6 => self.reports()?,
            7 => self.fee_quote()?,
            8 => return Ok(Flow::Exit),
            _ => self.say("Invalid option. Choose 1-8.")?,
        }
        Ok(Flow::Continue)
    }

    fn add_equipment(&mut self) -> MenuResult<()> {
        let asset_id = self.read_text("Asset ID: ")?;
        let name = self.read_text("Name: ")?;
        let brand = self.read_text("Brand: ")?;
        let warranty_months = self.read_number::<u32>("Warranty months (0 means expired): ")?;
        let category = self.read_text("Category (IT/LAB/AV/OTHER): ")?;

        let added = self.system.add_equipment(NewEquipment {
            asset_id,
            name,
            brand,
            warranty_months,
            category,
            kind: ItemKind::Equipment,
        })?;
        let line = format!("Equipment added: {added}");
        self.say(&line)?;
        Ok(())
    }

    fn register_staff(&mut self) -> MenuResult<()> {
        let staff_id = self.read_number::<u32>("Staff ID (number): ")?;
        let name = self.read_text("Name: ")?;
        let email = self.read_text("Email: ")?;
        let department = self.read_text("Department: ")?;

        let member = self.system.register_staff(NewStaffMember {
            staff_id,
            name,
            email,
            department,
        })?;
        let line = format!("Staff registered: {} ({})", member.name(), member.staff_id());
        self.say(&line)?;
        Ok(())
    }

    fn assign(&mut self) -> MenuResult<()> {
        let staff_id = StaffId::new(self.read_number::<u32>("Enter Staff ID: ")?);
        let asset_id = self.read_text("Enter Equipment Asset ID: ")?;

        self.system.assign(staff_id, &asset_id)?;
        let name = self
            .system
            .find_staff(staff_id)
            .map(|s| s.name().to_string())
            .unwrap_or_default();
        self.say(&format!("Assigned {} to {name}", asset_id.trim()))?;
        Ok(())
    }

    fn return_item(&mut self) -> MenuResult<()> {
        let staff_id = StaffId::new(self.read_number::<u32>("Enter Staff ID: ")?);
        let asset_id = self.read_text("Enter Equipment Asset ID to return: ")?;

        self.system.return_item(staff_id, &asset_id)?;
        self.say(&format!("Returned equipment: {}", asset_id.trim()))?;
        Ok(())
    }

    fn search(&mut self) -> MenuResult<()> {
        self.say(
            "\n--- SEARCH MENU ---\n\
             1. Search by name\n\
             2. Search by category (optional: available only)\n\
             3. Search by warranty range",
        )?;

        let out = match self.read_number::<u32>("Choose: ")? {
            1 => {
                let keyword = self.read_text("Enter name keyword: ")?;
                render::search_results(self.format, &self.system.search_by_name(&keyword))?
            }
            2 => {
                let keyword = self.read_text("Enter category keyword: ")?;
                let available_only = self
                    .read_text("Available only? (y/n): ")?
                    .eq_ignore_ascii_case("y");
                render::search_results(
                    self.format,
                    &self.system.search_by_category(&keyword, available_only),
                )?
            }
            3 => {
                let min = self.read_number::<i64>("Min warranty months: ")?;
                let max = self.read_number::<i64>("Max warranty months: ")?;
                let results = self.system.search_by_warranty_range(min, max);
                render::search_results(self.format, &results)?
            }
            _ => "Invalid search option.".to_string(),
        };
        self.say(&out)?;
        Ok(())
    }

    fn reports(&mut self) -> MenuResult<()> {
        self.say(
            "\n--- REPORTS MENU ---\n\
             1. Inventory report\n\
             2. Expired warranties\n\
             3. Assignments by department\n\
             4. Utilisation rate\n\
             5. Maintenance schedule",
        )?;

        let choice = self.read_number::<u32>("Choose: ")?;
        let view = self.system.reports();
        let out = match choice {
            1 => render::inventory(self.format, &view.inventory_listing())?,
            2 => render::expired_warranties(self.format, &view.expired_warranties())?,
            3 => render::assignments_by_department(self.format, &view.assignments_by_department())?,
            4 => render::utilization(self.format, &view.utilization_by_category())?,
            5 => render::maintenance_schedule(self.format, &view.maintenance_schedule())?,
            _ => "Invalid report option.".to_string(),
        };
        self.say(&out)?;
        Ok(())
    }

    fn fee_quote(&mut self) -> MenuResult<()> {
        let asset_id = self.read_text("Asset ID: ")?;
        let days = self.read_number::<i64>("Days overdue: ")?;

        let fee = self.system.maintenance_fee(&asset_id, days)?;
        self.say(&format!("Maintenance fee for {}: {fee:.2}", asset_id.trim()))?;
        Ok(())
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> MenuResult<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(MenuError::InputClosed);
        }
        // Undecodable bytes become U+FFFD and fail parsing like any other bad input.
        Ok(String::from_utf8_lossy(&raw).trim().to_string())
    }

    fn read_text(&mut self, prompt: &str) -> MenuResult<String> {
        self.prompt(prompt)?;
        self.read_line()
    }

    /// Keep asking until the line parses.
    fn read_number<T: FromStr>(&mut self, prompt: &str) -> MenuResult<T> {
        self.prompt(prompt)?;
        loop {
            let line = self.read_line()?;
            match line.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.prompt("Enter a valid number: ")?,
            }
        }
    }
}
