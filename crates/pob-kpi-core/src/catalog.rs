//! # Seed Catalog
//!
//! The two bundled POBs. Seeds carry no status: every status is computed when
//! a [`crate::scorecard::Scorecard`] is built from its seed.

use crate::kpi::KpiSeed;
use crate::recommendation::RecommendationTemplate;
use crate::types::Dimension;

/// Static definition of one POB.
#[derive(Debug, Clone, Copy)]
pub struct PobSeed {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Radar axes, in display order.
    pub dimensions: &'static [Dimension],
    pub kpis: &'static [KpiSeed<'static>],
    pub templates: &'static [RecommendationTemplate],
    /// Lecturer, credits, courses.
    pub workload: &'static [(&'static str, u32, u32)],
}

/// Every bundled POB.
pub static CATALOG: [PobSeed; 2] = [QUALITY_ASSURANCE, LECTURER_ASSIGNMENT];

/// Look up a seed by slug.
#[must_use]
pub fn find(slug: &str) -> Option<&'static PobSeed> {
    CATALOG.iter().find(|seed| seed.slug == slug)
}

// =============================================================================
// PENJAMINAN MUTU AKADEMIK
// =============================================================================

pub const QUALITY_ASSURANCE: PobSeed = PobSeed {
    slug: "penjaminan-mutu-akademik",
    title: "Penjaminan Mutu Akademik",
    description: "Prosedur Operasional Baku Penjaminan Mutu Akademik adalah serangkaian \
        langkah sistematis untuk memastikan kualitas dan standar akademik yang sesuai \
        dengan visi dan misi institusi.",
    dimensions: &[
        Dimension::Time,
        Dimension::Quality,
        Dimension::Participation,
        Dimension::Effectiveness,
        Dimension::Automation,
    ],
    kpis: &QUALITY_ASSURANCE_KPIS,
    templates: &[
        RecommendationTemplate {
            kpi_id: 2,
            text: "Terapkan proses peer review sebelum dokumen difinalisasi dan buat \
                checklist kualitas dokumen untuk mengurangi tingkat revisi.",
        },
        RecommendationTemplate {
            kpi_id: 8,
            text: "Lakukan pelatihan pra-audit untuk unit yang akan diaudit dan bagikan \
                contoh praktik terbaik dari unit yang sudah berhasil mengurangi temuan major.",
        },
        RecommendationTemplate {
            kpi_id: 13,
            text: "Prioritaskan otomatisasi untuk proses manual yang repetitif dan rawan \
                kesalahan. Lakukan analisis biaya-manfaat untuk setiap proses yang akan \
                diotomasikan.",
        },
    ],
    workload: &[],
};

const QUALITY_ASSURANCE_KPIS: [KpiSeed<'static>; 15] = [
    KpiSeed {
        id: 1,
        name: "Waktu Pembentukan GKM",
        description: "Waktu yang dibutuhkan dari inisiasi hingga SK GKM final terdistribusi",
        target: "7",
        achievement: "6",
        unit: "hari",
        boundaries: ["> 14 hari", "8-14 hari", "5-7 hari", "< 5 hari"],
        dimension: Dimension::Time,
        measurement_method: "Sistem tracking otomatis dari timestamp inisiasi hingga timestamp distribusi SK",
        higher_is_better: false,
    },
    KpiSeed {
        id: 2,
        name: "Tingkat Revisi Dokumen",
        description: "Persentase dokumen formal (SK, instrumen, laporan) yang mengalami revisi lebih dari 1 kali",
        target: "15",
        achievement: "18",
        unit: "%",
        boundaries: ["> 30%", "16-30%", "5-15%", "< 5%"],
        dimension: Dimension::Quality,
        measurement_method: "Jumlah dokumen dengan revisi > 1 / Total dokumen yang diproses",
        higher_is_better: false,
    },
    KpiSeed {
        id: 3,
        name: "Tingkat Kelengkapan Data",
        description: "Persentase kelengkapan data yang diperlukan untuk proses audit",
        target: "90",
        achievement: "85",
        unit: "%",
        boundaries: ["< 70%", "70-79%", "80-89%", "≥ 90%"],
        dimension: Dimension::Quality,
        measurement_method: "Jumlah data lengkap / Total data yang diminta",
        higher_is_better: true,
    },
    KpiSeed {
        id: 4,
        name: "Tingkat Partisipasi Dosen",
        description: "Persentase dosen yang berpartisipasi aktif dalam proses penjaminan mutu",
        target: "85",
        achievement: "78",
        unit: "%",
        boundaries: ["< 60%", "60-74%", "75-84%", "≥ 85%"],
        dimension: Dimension::Participation,
        measurement_method: "Jumlah dosen aktif / Total dosen",
        higher_is_better: true,
    },
    KpiSeed {
        id: 5,
        name: "Tingkat Partisipasi Mahasiswa",
        description: "Persentase mahasiswa yang mengisi evaluasi pembelajaran dan survei kepuasan",
        target: "75",
        achievement: "68",
        unit: "%",
        boundaries: ["< 50%", "50-64%", "65-74%", "≥ 75%"],
        dimension: Dimension::Participation,
        measurement_method: "Jumlah mahasiswa yang mengisi evaluasi / Total mahasiswa aktif",
        higher_is_better: true,
    },
    KpiSeed {
        id: 6,
        name: "Kepatuhan Standar Mutu",
        description: "Persentase kesesuaian aktivitas dengan standar mutu yang ditetapkan",
        target: "95",
        achievement: "91",
        unit: "%",
        boundaries: ["< 80%", "80-89%", "90-94%", "≥ 95%"],
        dimension: Dimension::Effectiveness,
        measurement_method: "Jumlah aktivitas sesuai standar / Total aktivitas yang diperiksa",
        higher_is_better: true,
    },
    KpiSeed {
        id: 7,
        name: "Efisiensi Jadwal Audit",
        description: "Persentase kegiatan audit yang selesai sesuai jadwal yang ditetapkan",
        target: "90",
        achievement: "82",
        unit: "%",
        boundaries: ["< 70%", "70-79%", "80-89%", "≥ 90%"],
        dimension: Dimension::Time,
        measurement_method: "Jumlah audit tepat waktu / Total audit yang dilaksanakan",
        higher_is_better: true,
    },
    KpiSeed {
        id: 8,
        name: "Temuan Audit",
        description: "Jumlah temuan audit yang bersifat major per kegiatan audit",
        target: "3",
        achievement: "5",
        unit: "temuan",
        boundaries: ["> 7 temuan", "5-7 temuan", "2-4 temuan", "≤ 1 temuan"],
        dimension: Dimension::Quality,
        measurement_method: "Rata-rata jumlah temuan major per kegiatan audit",
        higher_is_better: false,
    },
    KpiSeed {
        id: 9,
        name: "Kecepatan Perbaikan Temuan",
        description: "Waktu rata-rata yang dibutuhkan untuk menindaklanjuti temuan audit",
        target: "14",
        achievement: "17",
        unit: "hari",
        boundaries: ["> 30 hari", "21-30 hari", "14-20 hari", "< 14 hari"],
        dimension: Dimension::Time,
        measurement_method: "Rata-rata waktu dari notifikasi temuan hingga tindak lanjut selesai",
        higher_is_better: false,
    },
    KpiSeed {
        id: 10,
        name: "Digitalisasi Dokumen",
        description: "Persentase dokumen penjaminan mutu yang tersedia dalam format digital",
        target: "95",
        achievement: "87",
        unit: "%",
        boundaries: ["< 75%", "75-84%", "85-94%", "≥ 95%"],
        dimension: Dimension::Automation,
        measurement_method: "Jumlah dokumen digital / Total dokumen penjaminan mutu",
        higher_is_better: true,
    },
    KpiSeed {
        id: 11,
        name: "Indeks Kepuasan Audit",
        description: "Tingkat kepuasan unit yang diaudit terhadap proses audit mutu akademik",
        target: "4.0",
        achievement: "3.7",
        unit: "skala 1-5",
        boundaries: ["< 3.0", "3.0-3.49", "3.5-3.99", "≥ 4.0"],
        dimension: Dimension::Effectiveness,
        measurement_method: "Survei kepuasan dengan skala Likert 1-5",
        higher_is_better: true,
    },
    KpiSeed {
        id: 12,
        name: "Efektivitas Tindak Lanjut",
        description: "Persentase tindak lanjut yang efektif menyelesaikan temuan (tidak berulang)",
        target: "90",
        achievement: "82",
        unit: "%",
        boundaries: ["< 70%", "70-79%", "80-89%", "≥ 90%"],
        dimension: Dimension::Effectiveness,
        measurement_method: "Jumlah tindak lanjut efektif / Total tindak lanjut yang dievaluasi",
        higher_is_better: true,
    },
    KpiSeed {
        id: 13,
        name: "Otomatisasi Proses",
        description: "Persentase proses penjaminan mutu yang telah terotomatisasi",
        target: "75",
        achievement: "58",
        unit: "%",
        boundaries: ["< 40%", "40-59%", "60-74%", "≥ 75%"],
        dimension: Dimension::Automation,
        measurement_method: "Jumlah proses terotomatisasi / Total proses penjaminan mutu",
        higher_is_better: true,
    },
    KpiSeed {
        id: 14,
        name: "Akurasi Laporan",
        description: "Persentase laporan audit yang akurat dan tidak memerlukan revisi",
        target: "90",
        achievement: "85",
        unit: "%",
        boundaries: ["< 70%", "70-79%", "80-89%", "≥ 90%"],
        dimension: Dimension::Quality,
        measurement_method: "Jumlah laporan akurat / Total laporan audit",
        higher_is_better: true,
    },
    KpiSeed {
        id: 15,
        name: "Ketersediaan Auditor",
        description: "Persentase auditor yang tersedia saat dibutuhkan sesuai jadwal",
        target: "95",
        achievement: "88",
        unit: "%",
        boundaries: ["< 80%", "80-84%", "85-94%", "≥ 95%"],
        dimension: Dimension::Participation,
        measurement_method: "Jumlah auditor yang tersedia / Total auditor yang dijadwalkan",
        higher_is_better: true,
    },
];

// =============================================================================
// PENENTUAN DOSEN PENGAMPU MATA KULIAH
// =============================================================================

pub const LECTURER_ASSIGNMENT: PobSeed = PobSeed {
    slug: "penentuan-dosen-pengampu",
    title: "Penentuan Dosen Pengampu Mata Kuliah",
    description: "Prosedur Operasional Baku (POB) Penentuan Dosen Pengampu Mata Kuliah \
        adalah proses penugasan dosen untuk mengajar mata kuliah tertentu berdasarkan \
        kompetensi, beban kerja, dan kebutuhan program studi. POB ini memastikan \
        penugasan dosen yang optimal untuk meningkatkan kualitas pembelajaran.",
    dimensions: &[
        Dimension::Time,
        Dimension::Quality,
        Dimension::Efficiency,
        Dimension::Satisfaction,
    ],
    kpis: &LECTURER_ASSIGNMENT_KPIS,
    templates: &[
        RecommendationTemplate {
            kpi_id: 2,
            text: "Implementasikan sistem verifikasi multi-tahap sebelum finalisasi draft \
                untuk mengurangi kebutuhan revisi. Siapkan template standar untuk berbagai \
                kasus penugasan. Adakan pelatihan untuk staf penyusun draft.",
        },
        RecommendationTemplate {
            kpi_id: 3,
            text: "Perbarui matriks kompetensi dosen secara berkala. Libatkan koordinator \
                mata kuliah dalam proses pencocokan. Terapkan sistem rekomendasi berbasis \
                data riwayat mengajar dan keahlian dosen.",
        },
        RecommendationTemplate {
            kpi_id: 6,
            text: "Terapkan algoritma optimasi untuk mendistribusikan beban kerja secara \
                lebih merata. Pertimbangkan beban kerja non-pengajaran dalam perhitungan. \
                Buat visualisasi beban kerja untuk memudahkan analisis ketidakseimbangan.",
        },
        RecommendationTemplate {
            kpi_id: 7,
            text: "Lakukan survei lebih mendalam untuk mengidentifikasi penyebab \
                ketidakpuasan. Tingkatkan transparansi proses penugasan. Berikan kesempatan \
                dosen untuk menyampaikan preferensi sebelum penugasan final.",
        },
        RecommendationTemplate {
            kpi_id: 8,
            text: "Kembangkan dashboard monitoring beban SKS secara real-time. Tetapkan \
                batasan minimum dan maksimum yang jelas. Pertimbangkan beban administratif \
                dan penelitian dalam perhitungan beban total.",
        },
    ],
    workload: &[
        ("Dr. Ahmad Hakim", 14, 3),
        ("Prof. Budi Santoso", 8, 2),
        ("Dr. Citra Dewi", 12, 4),
        ("Dina Pratiwi, M.Sc.", 18, 5),
        ("Dr. Eko Prasetyo", 10, 3),
        ("Fajar Ramadhan, M.T.", 16, 4),
        ("Dr. Gita Nurfadilah", 6, 2),
        ("Hadi Wijaya, Ph.D.", 12, 3),
        ("Prof. Indah Permata", 10, 2),
        ("Dr. Joko Susilo", 15, 4),
    ],
};

const LECTURER_ASSIGNMENT_KPIS: [KpiSeed<'static>; 12] = [
    KpiSeed {
        id: 1,
        name: "Waktu Penyelesaian Total",
        description: "Total waktu yang dibutuhkan dari inisiasi hingga distribusi surat tugas",
        target: "30",
        achievement: "28",
        unit: "hari",
        boundaries: ["> 45 hari", "31-45 hari", "21-30 hari", "≤ 20 hari"],
        dimension: Dimension::Time,
        measurement_method: "Sistem tracking otomatis dari timestamp start hingga end event",
        higher_is_better: false,
    },
    KpiSeed {
        id: 2,
        name: "Tingkat Revisi",
        description: "Persentase draft penugasan yang memerlukan revisi setelah umpan balik dosen atau ketua jurusan",
        target: "20",
        achievement: "25",
        unit: "%",
        boundaries: ["> 40%", "21-40%", "11-20%", "≤ 10%"],
        dimension: Dimension::Quality,
        measurement_method: "Jumlah draft yang direvisi / Total draft yang dibuat",
        higher_is_better: false,
    },
    KpiSeed {
        id: 3,
        name: "Akurasi Pencocokan Dosen-Mata Kuliah",
        description: "Persentase kesesuaian antara kompetensi dosen dengan mata kuliah yang diampu",
        target: "85",
        achievement: "82",
        unit: "%",
        boundaries: ["< 70%", "70-84%", "85-94%", "≥ 95%"],
        dimension: Dimension::Quality,
        measurement_method: "Evaluasi berdasarkan matriks kompetensi yang tersimpan dalam Faculty Expertise System",
        higher_is_better: true,
    },
    KpiSeed {
        id: 4,
        name: "Waktu Respons Persetujuan",
        description: "Rata-rata waktu yang dibutuhkan untuk mendapatkan persetujuan dari Ketua Jurusan",
        target: "3",
        achievement: "4.5",
        unit: "hari",
        boundaries: ["> 7 hari", "5-7 hari", "2-4 hari", "≤ 1 hari"],
        dimension: Dimension::Time,
        measurement_method: "Selisih timestamp antara pengiriman draft dan penerimaan persetujuan",
        higher_is_better: false,
    },
    KpiSeed {
        id: 5,
        name: "Ketepatan Waktu Distribusi",
        description: "Persentase surat tugas yang didistribusikan sesuai jadwal akademik",
        target: "90",
        achievement: "88",
        unit: "%",
        boundaries: ["< 75%", "75-84%", "85-94%", "≥ 95%"],
        dimension: Dimension::Time,
        measurement_method: "Jumlah surat tugas tepat waktu / Total surat tugas",
        higher_is_better: true,
    },
    KpiSeed {
        id: 6,
        name: "Distribusi Beban Kerja",
        description: "Koefisien variasi beban mengajar antar dosen (standar deviasi dibagi rata-rata)",
        target: "0.25",
        achievement: "0.35",
        unit: "",
        boundaries: ["> 0.40", "0.31-0.40", "0.21-0.30", "≤ 0.20"],
        dimension: Dimension::Efficiency,
        measurement_method: "Perhitungan standar deviasi dibagi rata-rata dari beban SKS mengajar",
        higher_is_better: false,
    },
    KpiSeed {
        id: 7,
        name: "Kepuasan Dosen",
        description: "Tingkat kepuasan dosen terhadap proses penugasan (skala 1-5)",
        target: "4.2",
        achievement: "3.8",
        unit: "",
        boundaries: ["< 3.0", "3.0-3.9", "4.0-4.5", "> 4.5"],
        dimension: Dimension::Satisfaction,
        measurement_method: "Survei kepuasan dosen setelah menerima surat tugas",
        higher_is_better: true,
    },
    KpiSeed {
        id: 8,
        name: "Optimalisasi Beban SKS",
        description: "Persentase dosen dengan beban mengajar yang memenuhi standar minimum dan tidak melebihi maksimum",
        target: "85",
        achievement: "78",
        unit: "%",
        boundaries: ["< 70%", "70-79%", "80-89%", "≥ 90%"],
        dimension: Dimension::Efficiency,
        measurement_method: "Jumlah dosen dengan beban optimal / Total dosen",
        higher_is_better: true,
    },
    KpiSeed {
        id: 9,
        name: "Waktu Penyelesaian Administrasi",
        description: "Rata-rata waktu untuk menyelesaikan dokumentasi administratif setelah persetujuan",
        target: "2",
        achievement: "1.5",
        unit: "hari",
        boundaries: ["> 4 hari", "3-4 hari", "1-2 hari", "< 1 hari"],
        dimension: Dimension::Time,
        measurement_method: "Selisih waktu antara persetujuan dan finalisasi dokumen",
        higher_is_better: false,
    },
    KpiSeed {
        id: 10,
        name: "Kepuasan Mahasiswa",
        description: "Tingkat kepuasan mahasiswa terhadap kesesuaian dosen pengampu (skala 1-5)",
        target: "4.0",
        achievement: "4.2",
        unit: "",
        boundaries: ["< 3.0", "3.0-3.4", "3.5-4.0", "> 4.0"],
        dimension: Dimension::Satisfaction,
        measurement_method: "Survei kepuasan mahasiswa pada akhir semester",
        higher_is_better: true,
    },
    KpiSeed {
        id: 11,
        name: "Efisiensi Alokasi Kelas",
        description: "Persentase penggunaan optimal ruang kelas berdasarkan kapasitas dan jumlah mahasiswa",
        target: "80",
        achievement: "75",
        unit: "%",
        boundaries: ["< 65%", "65-74%", "75-84%", "≥ 85%"],
        dimension: Dimension::Efficiency,
        measurement_method: "Evaluasi penggunaan kapasitas ruang kelas",
        higher_is_better: true,
    },
    KpiSeed {
        id: 12,
        name: "Akurasi Penjadwalan",
        description: "Persentase jadwal yang tidak memerlukan perubahan setelah difinalisasi",
        target: "90",
        achievement: "86",
        unit: "%",
        boundaries: ["< 75%", "75-84%", "85-94%", "≥ 95%"],
        dimension: Dimension::Quality,
        measurement_method: "Jumlah jadwal tanpa perubahan / Total jadwal",
        higher_is_better: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique_and_findable() {
        assert_ne!(CATALOG[0].slug, CATALOG[1].slug);
        assert!(find("penjaminan-mutu-akademik").is_some());
        assert!(find("penentuan-dosen-pengampu").is_some());
        assert!(find("unknown").is_none());
    }

    #[test]
    fn kpi_ids_are_sequential() {
        for seed in &CATALOG {
            for (index, kpi) in seed.kpis.iter().enumerate() {
                assert_eq!(kpi.id as usize, index + 1, "{}", seed.slug);
            }
        }
    }

    #[test]
    fn every_kpi_dimension_is_a_radar_axis() {
        for seed in &CATALOG {
            for kpi in seed.kpis {
                assert!(seed.dimensions.contains(&kpi.dimension), "{}", kpi.name);
            }
        }
    }

    #[test]
    fn templates_point_at_existing_kpis() {
        for seed in &CATALOG {
            for template in seed.templates {
                assert!(seed.kpis.iter().any(|k| k.id == template.kpi_id));
            }
        }
    }
}
