//! Burst atomicity under shared access.
//!
//! The driver takes `&mut self`, so sharing it between threads forces a
//! lock around every operation and a whole burst can never interleave with
//! another. The recording interface below keeps each burst it receives as
//! one unit; the test then checks no burst contains bytes from both
//! writers.

use std::sync::{Arc, Mutex};
use std::thread;

use embedded_hal::digital::v2::OutputPin;
use embedded_hal_mock::delay::MockNoop;

use nokia5110::{DisplayInterface, Error, Nokia5110, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Framing {
    Command,
    Data,
}

#[derive(Clone, Default)]
struct RecordingInterface {
    bursts: Arc<Mutex<Vec<(Framing, Vec<u8>)>>>,
}

impl DisplayInterface for RecordingInterface {
    fn send_commands(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.bursts
            .lock()
            .unwrap()
            .push((Framing::Command, bytes.to_vec()));
        Ok(())
    }

    fn send_data(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.bursts
            .lock()
            .unwrap()
            .push((Framing::Data, bytes.to_vec()));
        Ok(())
    }
}

struct NoopPin;

impl OutputPin for NoopPin {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[test]
fn concurrent_writers_never_interleave_burst_bytes() {
    const BURSTS_PER_WRITER: usize = 64;

    let recorder = RecordingInterface::default();
    let mut lcd = Nokia5110::new(recorder.clone(), NoopPin);
    lcd.init(&mut MockNoop::new()).unwrap();

    let lcd = Arc::new(Mutex::new(lcd));

    let writers: Vec<_> = [0xAAu8, 0x55u8]
        .iter()
        .map(|&fill| {
            let lcd = Arc::clone(&lcd);
            thread::spawn(move || {
                for _ in 0..BURSTS_PER_WRITER {
                    let mut lcd = lcd.lock().unwrap();
                    lcd.data(&[fill; WIDTH as usize]).unwrap();
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }

    let bursts = recorder.bursts.lock().unwrap();
    let data_bursts: Vec<_> = bursts
        .iter()
        .filter(|(framing, _)| *framing == Framing::Data)
        .collect();

    assert_eq!(data_bursts.len(), 2 * BURSTS_PER_WRITER);
    for (_, bytes) in &data_bursts {
        assert_eq!(bytes.len(), WIDTH as usize);
        // every burst is wholly one writer's fill byte
        assert!(
            bytes.iter().all(|b| *b == bytes[0]),
            "interleaved burst: {:?}",
            bytes
        );
    }
}
