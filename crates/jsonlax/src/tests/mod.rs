mod cursor;
mod roundtrip;
