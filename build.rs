#![allow(unused_must_use)]

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("factorials_table.rs");
    let mut f = File::create(&dest_path).unwrap();

    gen_factorials(&mut f);
}

fn gen_factorials(f: &mut File) {
    let table = exact_factorials();

    writeln!(f, "/// The largest `n` for which `n!` fits in a `u64`.");
    writeln!(f, "pub const MAX_EXACT: i32 = {};", table.len() - 1);
    writeln!(f, "");
    writeln!(f, "/// `FACTORIALS[k] == k!` for every `k` up to `MAX_EXACT`.");
    writeln!(f, "pub static FACTORIALS: [u64; {}] = [", table.len());

    for (k, v) in table.iter().enumerate() {
        writeln!(f, "    /* {:2} */ {},", k, v);
    }

    f.write_all(b"];\n");
}

// Keep multiplying until the next factor no longer fits, so the table
// length is whatever the target `u64` can hold (21 entries).
fn exact_factorials() -> Vec<u64> {
    let mut table = vec![1u64];
    let mut acc : u64 = 1;
    let mut k : u64 = 1;

    loop {
        match acc.checked_mul(k) {
            Some(next) => {
                acc = next;
                table.push(acc);
                k += 1;
            }
            None => break,
        }
    }

    table
}
