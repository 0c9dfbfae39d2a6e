use detector_bank::image::ImageView;
use detector_bank::{BankParams, DetectorBank, DetectorKind};

fn main() {
    env_logger::init();
    // Demo: a coarse line bank, then look up a steep query and print its kernel.
    let params = BankParams {
        offset_step: 0.25,
        angle_steps: 4.0,
        width_min: 1.0,
        width_max: 3.0,
        width_step: 0.5,
        half_length: 4,
        ..BankParams::with_kind(DetectorKind::Line)
    };
    let bank = match DetectorBank::new(&params) {
        Ok(bank) => bank,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let counts = bank.counts();
    println!(
        "kernels={} ({}x{}x{}) support={} build_ms={:.3}",
        counts.kernels(),
        counts.offset,
        counts.width,
        counts.angle,
        bank.support(),
        bank.build_ms()
    );

    let (offset, width, angle) = (0.3, 2.0, 1.2);
    match bank.nearest_cell(offset, width, angle) {
        Ok(cell) => {
            let v = bank.cell_values(cell);
            let kernel = bank.kernel_at(cell);
            println!(
                "query=({offset}, {width}, {angle}) -> cell={:?} values=({:.3}, {:.3}, {:.3}) sum={:.4}",
                cell,
                v.offset,
                v.width,
                v.angle,
                kernel.sum()
            );
            for row in kernel.rows() {
                let line: Vec<String> = row.iter().map(|v| format!("{v:+.2}")).collect();
                println!("{}", line.join(" "));
            }
        }
        Err(err) => println!("query=({offset}, {width}, {angle}) -> {err}"),
    }
}
