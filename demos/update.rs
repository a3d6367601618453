// Dnsomatic-client, a client library for the DNS-O-Matic update service.
// Copyright (C) 2020-2023  Ronja Koistinen

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use dnsomatic_client::Updater;
use log::{error, info};

fn main() {
    env_logger::init();
    let mut updater = match Updater::new("username", "password") {
        Ok(updater) => updater,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    updater.set_hostname("sub.example.com").set_myip("192.168.0.10");
    std::process::exit(match updater.exec() {
        Ok(changed) => {
            info!("Record changed: {changed}");
            0
        }
        Err(e) => {
            error!("{e}");
            1
        }
    })
}
