use chainlink_oracle::{
    state::{
        layout::{DISCRIMINATOR_LEN, HEADER_OFFSET, TRANSMISSIONS_OFFSET},
        FeedHeader, TRANSMISSION_LEN,
    },
    Pubkey,
};

pub const START_TIMESTAMP: u32 = 1_654_000_000;

pub const ETH_USD_HEADER_HEX: &str = concat!(
    "020111d3be3f3544f970bd6fd0d49cc6",
    "9cd3ea549b220b34c874ede871afe057",
    "550f0000000000000000000000000000",
    "00000000000000000000000000000000",
    "00006c6670e4187ad830d9c44710b498",
    "044edee2e3d2c1512d030b73cebdc092",
    "fc3e455448202f205553440000000000",
    "00000000000000000000000000000000",
    "00000800000000f3fe18001e00040000",
    "f30200004cd500000000000000000000",
    "00000000000000000000000000000000",
    "00000000000000000000000000000000",
);

pub const ETH_USD_TRANSMISSION_HEX: &str = concat!(
    "242e43080000000040049a6200000000",
    "556eb502290000000000000000000000",
    "00000000000000000000000000000000",
);

pub fn from_hex(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).unwrap()
}

pub fn encode_header(header: &FeedHeader) -> Vec<u8> {
    let mut buff = Vec::with_capacity(192);
    buff.push(header.version);
    buff.push(header.state);
    buff.extend_from_slice(header.owner.as_ref());
    buff.extend_from_slice(header.proposed_owner.as_ref());
    buff.extend_from_slice(header.writer.as_ref());
    let mut description = [0_u8; 32];
    description[..header.description.len()].copy_from_slice(header.description.as_bytes());
    buff.extend_from_slice(&description);
    buff.push(header.decimals);
    buff.extend_from_slice(&header.flagging_threshold.to_le_bytes());
    buff.extend_from_slice(&header.latest_round_id.to_le_bytes());
    buff.push(header.granularity);
    buff.extend_from_slice(&header.live_length.to_le_bytes());
    buff.extend_from_slice(&header.live_cursor.to_le_bytes());
    buff.extend_from_slice(&header.historical_cursor.to_le_bytes());
    buff.resize(192, 0);
    buff
}

pub fn encode_transmission(slot: u64, timestamp: u32, answer: i128) -> [u8; TRANSMISSION_LEN] {
    let mut buff = [0_u8; TRANSMISSION_LEN];
    buff[0..8].copy_from_slice(&slot.to_le_bytes());
    buff[8..12].copy_from_slice(&timestamp.to_le_bytes());
    buff[16..32].copy_from_slice(&answer.to_le_bytes());
    buff
}

/// Answer written by [`FeedBuilder`] for a round, negative for odd rounds.
pub fn answer_of(round_id: u32) -> i128 {
    let answer = i128::from(round_id) * 1_000_000_007;
    if round_id % 2 == 1 {
        -answer
    } else {
        answer
    }
}

pub fn timestamp_of(round_id: u32) -> u32 {
    START_TIMESTAMP + round_id * 10
}

/// Feed account written the way the store program does it.
pub struct FeedBuilder {
    header: FeedHeader,
    historical_length: u32,
    transmissions: Vec<[u8; TRANSMISSION_LEN]>,
}

impl FeedBuilder {
    pub fn new(live_length: u32, historical_length: u32, granularity: u8) -> Self {
        let header = FeedHeader {
            version: 2,
            state: 1,
            owner: Pubkey::new_unique(),
            proposed_owner: Pubkey::default(),
            writer: Pubkey::new_unique(),
            description: "ETH / USD".to_string(),
            decimals: 8,
            flagging_threshold: 0,
            latest_round_id: 0,
            granularity,
            live_length,
            live_cursor: 0,
            historical_cursor: 0,
        };
        let slots = (live_length + historical_length) as usize;
        Self {
            header,
            historical_length,
            transmissions: vec![[0; TRANSMISSION_LEN]; slots],
        }
    }

    /// Append one round to the live ring, and to the historical ring when sampled.
    pub fn submit(&mut self, answer: i128, timestamp: u32) -> &mut Self {
        let header = &mut self.header;
        header.latest_round_id += 1;
        let transmission =
            encode_transmission(u64::from(header.latest_round_id) + 100, timestamp, answer);

        self.transmissions[header.live_cursor as usize] = transmission;
        header.live_cursor = (header.live_cursor + 1) % header.live_length;

        if header.latest_round_id % u32::from(header.granularity) == 0 && self.historical_length > 0
        {
            let position = header.live_length + header.historical_cursor;
            self.transmissions[position as usize] = transmission;
            header.historical_cursor = (header.historical_cursor + 1) % self.historical_length;
        }
        self
    }

    pub fn submit_rounds(&mut self, count: u32) -> &mut Self {
        for _ in 0..count {
            let round_id = self.header.latest_round_id + 1;
            self.submit(answer_of(round_id), timestamp_of(round_id));
        }
        self
    }

    pub fn header(&self) -> &FeedHeader {
        &self.header
    }

    pub fn build(&self) -> Vec<u8> {
        let mut data = vec![0xd7_u8; DISCRIMINATOR_LEN];
        data.extend_from_slice(&encode_header(&self.header));
        assert_eq!(data.len(), TRANSMISSIONS_OFFSET);
        for transmission in &self.transmissions {
            data.extend_from_slice(transmission);
        }
        data
    }
}

/// Account holding the recorded ETH / USD header, with its latest transmission
/// in place and `historical_length` historical slots.
pub fn eth_usd_account(historical_length: usize) -> Vec<u8> {
    let header = from_hex(ETH_USD_HEADER_HEX);
    let live_length = 1024;
    let mut data = vec![0_u8; TRANSMISSIONS_OFFSET + (live_length + historical_length) * TRANSMISSION_LEN];
    data[HEADER_OFFSET..HEADER_OFFSET + header.len()].copy_from_slice(&header);
    // live cursor 755, latest round in slot 754
    let offset = TRANSMISSIONS_OFFSET + 754 * TRANSMISSION_LEN;
    data[offset..offset + TRANSMISSION_LEN].copy_from_slice(&from_hex(ETH_USD_TRANSMISSION_HEX));
    data
}
