// Code generated by bencode-gen test DO NOT EDIT.

use std::io::{self, Write};

use bencode_gen_core::runtime::Bencode;
use bencode_gen_core::runtime::sorted_keys;
#[allow(unused_imports)]
use bencode_gen_core::runtime::{write_int, write_string};

impl Bencode for Options {
    fn write_bencode(&self, w: &mut dyn Write) -> io::Result<()> {
        w.write_all(b"d")?;
        if self.Count != 0 {
            w.write_all(b"5:counti")?;
            write_int(w, &self.Count)?;
            w.write_all(b"e")?;
        }
        w.write_all(b"5:flagsl")?;
        for i0 in self.Flags.iter() {
            w.write_all(b"i")?;
            bencode_gen_core::runtime::write_bool(w, *i0)?;
            w.write_all(b"e")?;
        }
        w.write_all(b"e")?;
        if !self.Grace.is_zero() {
            w.write_all(b"5:gracei")?;
            write_int(w, &self.Grace.as_secs())?;
            w.write_all(b"e")?;
        }
        if self.Nick.is_some() {
            w.write_all(b"4:nick")?;
            write_string(w, &(*bencode_gen_core::runtime::deref(&self.Nick)?))?;
        }
        if !self.Scores.is_empty() {
            w.write_all(b"6:scoresd")?;
            for k0 in sorted_keys(self.Scores.keys()) {
                write_string(w, k0)?;
                w.write_all(b"d")?;
                for k1 in sorted_keys(self.Scores[k0].keys()) {
                    write_string(w, k1)?;
                    w.write_all(b"i")?;
                    write_int(w, &self.Scores[k0][k1])?;
                    w.write_all(b"e")?;
                }
                w.write_all(b"e")?;
            }
            w.write_all(b"e")?;
        }
        if self.Seen {
            w.write_all(b"4:seeni")?;
            bencode_gen_core::runtime::write_bool(w, self.Seen)?;
            w.write_all(b"e")?;
        }
        w.write_all(b"e")?;
        Ok(())
    }
}

impl Bencode for Torrent {
    fn write_bencode(&self, w: &mut dyn Write) -> io::Result<()> {
        w.write_all(b"d8:announce")?;
        write_string(w, &self.Announce)?;
        w.write_all(b"5:filesd")?;
        for k0 in sorted_keys(self.Info.Files.keys()) {
            let k0: &PeerId = k0;
            write_string(w, k0)?;
            w.write_all(b"i")?;
            write_int(w, &self.Info.Files[k0])?;
            w.write_all(b"e")?;
        }
        w.write_all(b"e")?;
        if !self.Peers.is_empty() {
            w.write_all(b"5:peersl")?;
            for i0 in self.Peers.iter() {
                w.write_all(b"d2:ip")?;
                write_string(w, &(*bencode_gen_core::runtime::deref(i0)?).Ip)?;
                w.write_all(b"4:porti")?;
                write_int(w, &(*bencode_gen_core::runtime::deref(i0)?).Port)?;
                w.write_all(b"ee")?;
            }
            w.write_all(b"e")?;
        }
        w.write_all(b"12:piece lengthi")?;
        write_int(w, &self.Info.PieceLength)?;
        w.write_all(b"e7:privatei")?;
        bencode_gen_core::runtime::write_bool(w, self.Private)?;
        w.write_all(b"e3:sig")?;
        Bencode::write_bencode(&self.Sig, w)?;
        w.write_all(b"3:ttli")?;
        write_int(w, &self.Ttl.as_secs())?;
        w.write_all(b"ee")?;
        Ok(())
    }
}
