// benches/bench_decode_line.rs

//! Benchmark [`decode_line`] on representative structured log lines, and a
//! whole pass over an in-memory log.
//!
//! [`decode_line`]: mloglib::data::logrecord::decode_line

#![allow(non_upper_case_globals)]

use std::io::Cursor;

use ::criterion::{black_box, criterion_group, criterion_main, Criterion};
use ::lazy_static::lazy_static;
use ::mloglib::data::logrecord::decode_line;
use ::mloglib::readers::infoprocessor::process_reader;
use ::mloglib::readers::startupaccumulator::AccumulatorConfig;

const LINE_SHORT: &[u8] = br#"{"t":{"$date":"2022-07-20T12:29:53.000-07:00"},"s":"I","c":"NETWORK","id":22943,"ctx":"listener","msg":"Connection accepted","attr":{"remote":"127.0.0.1:50000","connectionCount":1}}"#;
const LINE_STARTING: &[u8] = br#"{"t":{"$date":"2022-07-20T12:29:51.886-07:00"},"s":"I","c":"CONTROL","id":4615611,"ctx":"initandlisten","msg":"MongoDB starting","attr":{"pid":100,"port":27017,"dbPath":"/data/db","architecture":"64-bit","host":"h1"}}"#;
const LINE_OPTIONS: &[u8] = br#"{"t":{"$date":"2022-07-20T12:29:52.500-07:00"},"s":"I","c":"CONTROL","id":21951,"ctx":"initandlisten","msg":"Options set by command line","attr":{"options":{"config":"/etc/mongod.conf","net":{"bindIp":"127.0.0.1","port":27017},"processManagement":{"timeZoneInfo":"/usr/share/zoneinfo"},"replication":{"replSetName":"rs0"},"storage":{"dbPath":"/var/lib/mongodb","journal":{"enabled":true}},"systemLog":{"destination":"file","logAppend":true,"path":"/var/log/mongodb/mongod.log"}}}}"#;
const LINE_BANNER: &[u8] = b"HEADER INCLUDED, NOW SKIPPING 2167 LINES";

lazy_static! {
    /// One startup followed by many uninteresting records.
    static ref LOG_DATA: Vec<u8> = {
        let mut data: Vec<u8> = Vec::new();
        for line in [LINE_STARTING, LINE_OPTIONS].iter() {
            data.extend_from_slice(line);
            data.push(b'\n');
        }
        for _ in 0..1000 {
            data.extend_from_slice(LINE_SHORT);
            data.push(b'\n');
        }
        data
    };
}

fn decode_lines() {
    for line in [LINE_SHORT, LINE_STARTING, LINE_OPTIONS, LINE_BANNER].iter() {
        black_box(decode_line(black_box(line)));
    }
}

fn process_log() {
    let config = AccumulatorConfig::default();
    let mut out: Vec<u8> = Vec::with_capacity(0x1000);
    let path = String::from("bench.log");
    let _ = black_box(process_reader(&path, Cursor::new(LOG_DATA.as_slice()), &mut out, &config));
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut bg = c.benchmark_group("decode_line");
    bg.bench_function("decode_line_mixed", |b| b.iter(decode_lines));
    bg.bench_function("process_reader_1002_lines", |b| b.iter(process_log));
    bg.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
