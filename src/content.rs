// Static copy for the site. Kept out of the components so pages stay short.

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub image: &'static str,
    pub cta_label: &'static str,
    pub cta_target: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide {
        title: "Sayuran Hidroponik Segar Setiap Hari",
        subtitle: "Dipanen pagi hari langsung dari kebun kami di Cirebon",
        image: "/assets/slide-greenhouse.jpg",
        cta_label: "Lihat Produk",
        cta_target: "produk",
    },
    Slide {
        title: "Teknologi Pertanian Modern",
        subtitle: "Sistem NFT dan DFT dengan pemantauan nutrisi otomatis",
        image: "/assets/slide-nft.jpg",
        cta_label: "Pelajari Teknologi",
        cta_target: "tentang",
    },
    Slide {
        title: "Pelatihan & Konsultasi",
        subtitle: "Bangun kebun hidroponik Anda sendiri bersama tim kami",
        image: "/assets/slide-training.jpg",
        cta_label: "Hubungi Kami",
        cta_target: "kontak",
    },
];

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: 12, suffix: "", label: "Greenhouse" },
    Stat { target: 25, suffix: "+", label: "Varietas Sayuran" },
    Stat { target: 1500, suffix: "+", label: "Pelanggan" },
    Stat { target: 300, suffix: "", label: "Peserta Pelatihan" },
];

#[derive(Clone, PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub description: &'static str,
    pub images: &'static [GalleryImage],
}

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Selada Hidroponik",
        description: "Selada keriting dan romaine, renyah dan bebas pestisida.",
        images: &[
            GalleryImage { src: "/assets/selada-1.jpg", alt: "Selada keriting" },
            GalleryImage { src: "/assets/selada-2.jpg", alt: "Selada romaine" },
            GalleryImage { src: "/assets/selada-3.jpg", alt: "Panen selada" },
        ],
    },
    Product {
        name: "Pakcoy & Sawi",
        description: "Sayuran daun favorit untuk tumisan dan sup keluarga.",
        images: &[
            GalleryImage { src: "/assets/pakcoy-1.jpg", alt: "Pakcoy hijau" },
            GalleryImage { src: "/assets/pakcoy-2.jpg", alt: "Sawi manis" },
        ],
    },
];

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Apa itu hidroponik?",
        answer: "Hidroponik adalah metode bercocok tanam tanpa tanah, menggunakan larutan nutrisi yang dialirkan ke akar tanaman.",
    },
    FaqEntry {
        question: "Apakah sayuran hidroponik bebas pestisida?",
        answer: "Ya. Tanaman kami tumbuh di greenhouse tertutup sehingga tidak memerlukan pestisida kimia.",
    },
    FaqEntry {
        question: "Bagaimana cara memesan?",
        answer: "Isi formulir kontak atau hubungi kami melalui email. Pengiriman tersedia untuk wilayah Cirebon dan sekitarnya.",
    },
    FaqEntry {
        question: "Apakah tersedia pelatihan untuk pemula?",
        answer: "Tersedia kelas akhir pekan untuk pemula, termasuk praktik merakit instalasi sederhana.",
    },
];

pub const CONTACT_SUBJECTS: &[&str] = &[
    "Pemesanan Produk",
    "Konsultasi",
    "Pelatihan",
    "Kerja Sama",
    "Lainnya",
];
